//! Image decoding for answer pictures.
//!
//! PNG bodies are decoded to RGBA here. JPEG, GIF, WebP and SVG are
//! recognised by signature and passed through encoded; anything else is a
//! decode error.

use std::sync::OnceLock;

use png::{ColorType, Decoder, Transformations};

use super::error::ResolveError;
use super::types::{DecodedImage, ImageFormat};

// Shown whenever there is no fetched image
static PLACEHOLDER_PNG: &[u8] = include_bytes!("../../assets/placeholder.png");

static PLACEHOLDER: OnceLock<Option<DecodedImage>> = OnceLock::new();

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Decode downloaded bytes into something displayable
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, ResolveError> {
    if bytes.starts_with(PNG_SIGNATURE) {
        return decode_png_to_rgba(bytes);
    }
    match sniff_format(bytes) {
        Some(format) => Ok(DecodedImage::Encoded {
            format,
            bytes: bytes.to_vec(),
        }),
        None => Err(ResolveError::ImageDecode(format!(
            "unrecognised image data ({} bytes)",
            bytes.len()
        ))),
    }
}

/// The default "help" picture. `None` only if the embedded asset is broken.
pub fn placeholder() -> Option<&'static DecodedImage> {
    PLACEHOLDER
        .get_or_init(|| match decode_png_to_rgba(PLACEHOLDER_PNG) {
            Ok(image) => Some(image),
            Err(e) => {
                log::error!("Embedded placeholder image is invalid: {}", e);
                None
            }
        })
        .as_ref()
}

fn sniff_format(bytes: &[u8]) -> Option<ImageFormat> {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(ImageFormat::Jpeg);
    }
    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return Some(ImageFormat::Gif);
    }
    if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some(ImageFormat::WebP);
    }
    let head = &bytes[..bytes.len().min(256)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start();
    if text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg")) {
        return Some(ImageFormat::Svg);
    }
    None
}

/// Decode PNG data to 8-bit RGBA
fn decode_png_to_rgba(png_data: &[u8]) -> Result<DecodedImage, ResolveError> {
    let mut decoder = Decoder::new(png_data);
    // Palette and low bit depths become RGB(A)/gray, 16-bit becomes 8-bit
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| ResolveError::ImageDecode(format!("failed to read PNG header: {e}")))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| ResolveError::ImageDecode(format!("failed to decode PNG: {e}")))?;

    let width = info.width;
    let height = info.height;
    let data = &buf[..info.buffer_size()];
    let capacity = (width as usize) * (height as usize) * 4;

    let pixels = match info.color_type {
        ColorType::Rgba => data.to_vec(),
        ColorType::Rgb => {
            let mut rgba = Vec::with_capacity(capacity);
            for chunk in data.chunks(3) {
                rgba.extend_from_slice(chunk);
                rgba.push(255);
            }
            rgba
        }
        ColorType::GrayscaleAlpha => {
            let mut rgba = Vec::with_capacity(capacity);
            for chunk in data.chunks(2) {
                let gray = chunk[0];
                rgba.extend_from_slice(&[gray, gray, gray, chunk[1]]);
            }
            rgba
        }
        ColorType::Grayscale => {
            let mut rgba = Vec::with_capacity(capacity);
            for &gray in data {
                rgba.extend_from_slice(&[gray, gray, gray, 255]);
            }
            rgba
        }
        ColorType::Indexed => {
            return Err(ResolveError::ImageDecode(
                "indexed PNG left unexpanded".to_string(),
            ));
        }
    };

    Ok(DecodedImage::Rgba {
        width,
        height,
        pixels,
    })
}
