use serde::Deserialize;
use serde::Serialize;
use std::env;

pub const DEFAULT_QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/";
pub const DEFAULT_QR_SIZE: u32 = 150;
pub const DEFAULT_LOGO_PLACEHOLDER: &str = "https://placehold.co/100x100/252525/64748b?text=Logo";

/// Settings for the verification card's remote images.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CardPrefs {
    /// Base URL of the QR image generation service.
    pub qr_service: String,

    /// Edge length in pixels requested from the QR service.
    pub qr_size: u32,

    /// Image shown in place of a logo that fails to load.
    pub logo_placeholder: String,
}

impl CardPrefs {
    /// Builds preferences from environment variables, falling back to the
    /// built-in defaults for anything unset or unparseable.
    ///
    /// # Environment Variables
    /// - `CARE4ALL_QR_SERVICE`: base URL of the QR service.
    /// - `CARE4ALL_QR_SIZE`: requested QR edge length in pixels (non-zero).
    /// - `CARE4ALL_LOGO_PLACEHOLDER`: URL of the logo placeholder image.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let qr_service = lookup("CARE4ALL_QR_SERVICE")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_QR_SERVICE.to_string());

        let qr_size = lookup("CARE4ALL_QR_SIZE")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_QR_SIZE);

        let logo_placeholder = lookup("CARE4ALL_LOGO_PLACEHOLDER")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOGO_PLACEHOLDER.to_string());

        Self {
            qr_service,
            qr_size,
            logo_placeholder,
        }
    }
}

impl Default for CardPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}
