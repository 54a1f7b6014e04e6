//! Builders for the addresses the card hands off to: the in-app profile
//! route, the WhatsApp deep link and the QR image service.

use crate::prefs::card_prefs::CardPrefs;

/// Payee used in the QR payload when the NGO has no UPI id.
pub const EXAMPLE_UPI_ID: &str = "example@upi";

/// In-app route of an NGO's full profile.
pub fn profile_path(id: &str) -> String {
    format!("/ngo/{id}")
}

/// Strips everything but ASCII digits from a phone number.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// WhatsApp chat link for a phone number, or `None` if it holds no digits.
///
/// No length or country-code validation is done.
pub fn whatsapp_link(phone: &str) -> Option<String> {
    let digits = phone_digits(phone);
    if digits.is_empty() {
        None
    } else {
        Some(format!("https://wa.me/{digits}"))
    }
}

/// `upi://pay` payment URI for a payee address.
pub fn upi_payment_uri(upi_id: Option<&str>) -> String {
    format!("upi://pay?pa={}", upi_id.unwrap_or(EXAMPLE_UPI_ID))
}

/// URL of the remote QR image encoding the UPI payment URI.
///
/// The payload is passed through unescaped, as the QR service expects.
pub fn upi_qr_url(prefs: &CardPrefs, upi_id: Option<&str>) -> String {
    format!(
        "{}?size={size}x{size}&data={}",
        prefs.qr_service,
        upi_payment_uri(upi_id),
        size = prefs.qr_size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::card_prefs::DEFAULT_LOGO_PLACEHOLDER;
    use crate::prefs::card_prefs::DEFAULT_QR_SERVICE;

    fn default_prefs() -> CardPrefs {
        CardPrefs {
            qr_service: DEFAULT_QR_SERVICE.to_string(),
            qr_size: 150,
            logo_placeholder: DEFAULT_LOGO_PLACEHOLDER.to_string(),
        }
    }

    #[test]
    fn test_profile_path() {
        assert_eq!(profile_path("ngo42"), "/ngo/ngo42");
    }

    #[test]
    fn test_whatsapp_link_strips_non_digits() {
        assert_eq!(
            whatsapp_link("+91 98765 43210").as_deref(),
            Some("https://wa.me/919876543210")
        );
        assert_eq!(
            whatsapp_link("+91-9876543210").as_deref(),
            Some("https://wa.me/919876543210")
        );
    }

    #[test]
    fn test_whatsapp_link_without_digits() {
        assert_eq!(whatsapp_link(""), None);
        assert_eq!(whatsapp_link("call us"), None);
        // non-ASCII digits are not phone digits
        assert_eq!(whatsapp_link("٩٨٧"), None);
    }

    #[test]
    fn test_qr_url() {
        assert_eq!(
            upi_qr_url(&default_prefs(), Some("x7@ybl")),
            "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=upi://pay?pa=x7@ybl"
        );
        assert_eq!(
            upi_qr_url(&default_prefs(), None),
            "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=upi://pay?pa=example@upi"
        );
    }

    #[test]
    fn test_qr_url_honours_size() {
        let prefs = CardPrefs {
            qr_size: 256,
            ..default_prefs()
        };
        assert!(upi_qr_url(&prefs, None).contains("size=256x256"));
    }
}
