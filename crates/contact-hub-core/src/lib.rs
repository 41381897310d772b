pub mod constants;
pub mod contact;
pub mod notification;
pub mod util;
