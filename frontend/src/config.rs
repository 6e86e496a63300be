/// localStorage key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Media query used when no theme preference has been stored yet.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Number the purchase buttons open a WhatsApp chat with.
pub const WHATSAPP_NUMBER: &str = "584123161687";

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

pub const PRESENTATION_VIDEO: &str = "/videos/presentation.mp4";
pub const LOGO_IMAGE: &str = "/images/logo.png";
pub const INGREDIENTS_LABEL_IMAGE: &str = "/images/ingredients-label.png";
pub const CUSTOMER_PLACEHOLDER_IMAGE: &str = "/images/customer.svg";
pub const SOAP_IMAGE_DIR: &str = "/images/soap";

/// Delay before scrolling to a `#section` fragment found on first load,
/// so every section has been mounted.
pub const DEEP_LINK_SCROLL_DELAY_MS: u32 = 100;

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
