use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn get_app_url() -> &'static str {
    "http://localhost:3000"  // Web app running locally
}

#[cfg(not(debug_assertions))]
pub fn get_app_url() -> &'static str {
    "https://app.eatora.tech"
}

pub fn app_link(path: &str) -> String {
    format!("{}{}", get_app_url(), path)
}

/// localStorage key holding the cookie banner decision.
pub const CONSENT_STORAGE_KEY: &str = "cookie-consent";

/// Height of the sticky header that scroll targets must clear.
pub const HEADER_OFFSET: f64 = 120.0;

pub const CONTACT_EMAIL: &str = "eatora.app@gmail.com";
pub const SITE_URL: &str = "https://eatora.tech/";
pub const DISCORD_INVITE: &str = "https://discord.gg/dkrn5r5kZ9";
pub const WALKTHROUGH_VIDEO: &str = "https://www.youtube.com/embed/q4qs-L6HRvQ";
