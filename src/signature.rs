//! Decoding of the hand-drawn signature stored in the user profile.
//!
//! The signature comes from a drawing canvas as a `data:image/png;base64,...` URL. The bare base64
//! payload is accepted as well.

use base64::Engine as _;
use image::DynamicImage;

use crate::error::ContextError;

/// The width, in points, the signature is drawn at.
pub const SIGNATURE_WIDTH: f32 = 100.0;
/// The height, in points, the signature is drawn at, keeping the 150 by 40 proportions of the canvas.
pub const SIGNATURE_HEIGHT: f32 = SIGNATURE_WIDTH / 150.0 * 40.0;

/// Returns the base64 payload of a data URL, or the input itself if it carries no data URL prefix.
fn base64_payload(signature_data: &str) -> &str {
    let signature_data = signature_data.trim();
    match signature_data.strip_prefix("data:") {
        Some(data_url) => data_url
            .split_once(',')
            .map_or(data_url, |(_, payload)| payload),
        None => signature_data,
    }
}

/// Decodes the signature into a raster image.
pub fn decode_signature(signature_data: &str) -> Result<DynamicImage, ContextError> {
    let image_bytes = base64::engine::general_purpose::STANDARD
        .decode(base64_payload(signature_data))
        .map_err(|error| {
            ContextError::with_error("Failed to decode the base64 data of the signature", &error)
        })?;

    let signature = image::load_from_memory(&image_bytes)
        .map_err(|error| ContextError::with_error("Failed to decode the signature image", &error))?;
    log::debug!(
        "Decoded a signature of {}x{} pixels",
        signature.width(),
        signature.height()
    );

    Ok(signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_base64() -> String {
        let mut png_bytes = Vec::new();
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(15, 4, Rgba([0, 0, 0, 255])))
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .unwrap();

        base64::engine::general_purpose::STANDARD.encode(png_bytes)
    }

    #[test]
    fn data_urls_and_bare_base64_are_decoded() {
        let payload = png_base64();

        let from_data_url = decode_signature(&format!("data:image/png;base64,{payload}")).unwrap();
        assert_eq!((from_data_url.width(), from_data_url.height()), (15, 4));

        let from_payload = decode_signature(&payload).unwrap();
        assert_eq!((from_payload.width(), from_payload.height()), (15, 4));
    }

    #[test]
    fn invalid_base64_is_an_error() {
        let error = decode_signature("data:image/png;base64,@@not base64@@").unwrap_err();
        assert_eq!(error.context, "Failed to decode the base64 data of the signature");
    }

    #[test]
    fn corrupt_images_are_an_error() {
        let not_a_png = base64::engine::general_purpose::STANDARD.encode(b"definitely not a png");
        let error = decode_signature(&not_a_png).unwrap_err();
        assert_eq!(error.context, "Failed to decode the signature image");
    }
}
