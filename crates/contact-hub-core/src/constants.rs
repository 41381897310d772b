// Notifications
pub const NOTIFICATION_DISPLAY_DURATION_MS: u64 = 3_000;
pub const NOTIFICATION_FADE_OUT_MS: u64 = 300;
