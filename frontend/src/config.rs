
#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "/assets"  // Served by trunk from frontend/assets
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "/static/assets"  // Production bundle path
}

pub fn asset_url(file: &str) -> String {
    format!("{}/{}", get_asset_base(), file)
}

/// How often the testimonials carousel moves to the next guest story.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5_000;

/// Minimum |offset| * velocity for a drag to count as a page turn.
pub const SWIPE_CONFIDENCE_THRESHOLD: f64 = 10_000.0;

pub const LOADING_TICK_MS: u32 = 120;
pub const LOADING_FADE_DELAY_MS: u32 = 300;
pub const LOADING_EXIT_MS: u32 = 600;

pub const NAV_REVEAL_DELAY_MS: u32 = 100;
pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;

pub const CONTACT_SUBMIT_DELAY_MS: u32 = 2_000;
pub const NOTIFICATION_DURATION_MS: u32 = 5_000;

pub const RESORT_NAME: &str = "J&L Kabini Palace";
pub const RESORT_PHONE: &str = "+91 98765 43210";
