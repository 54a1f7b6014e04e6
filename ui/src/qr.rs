//! Local rendering of the UPI payment QR code.
//!
//! The card normally shows a QR image fetched from a remote service. When
//! that fetch fails, the same payload is rendered here as an SVG `data:` URI
//! so the donor still gets a scannable code.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dioxus_logger::tracing;
use qrcode::render::svg;
use qrcode::EcLevel;
use qrcode::QrCode;

/// Shown when the payload cannot be encoded at all.
pub const NEUTRAL_QR_PLACEHOLDER: &str = "https://placehold.co/130x130/f1f5f9/64748b?text=QR";

const QR_EDGE: u32 = 130;

/// Image source for the QR placeholder encoding `payload`.
pub fn placeholder_src(payload: &str) -> String {
    match QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M) {
        Ok(code) => {
            let image = code
                .render::<svg::Color>()
                .min_dimensions(QR_EDGE, QR_EDGE)
                .build();
            format!("data:image/svg+xml;base64,{}", STANDARD.encode(image))
        }
        Err(e) => {
            tracing::warn!("cannot encode QR payload of {} bytes: {}", payload.len(), e);
            NEUTRAL_QR_PLACEHOLDER.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_svg_data_uri() {
        let src = placeholder_src("upi://pay?pa=x7@ybl");
        let encoded = src.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let svg = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        assert_eq!(
            placeholder_src("upi://pay?pa=example@upi"),
            placeholder_src("upi://pay?pa=example@upi")
        );
    }

    #[test]
    fn test_oversized_payload_uses_neutral_placeholder() {
        let payload = "x".repeat(5000);
        assert_eq!(placeholder_src(&payload), NEUTRAL_QR_PLACEHOLDER);
    }
}
