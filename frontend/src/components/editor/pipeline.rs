//! Image ingestion pipeline: from a raw `File` to an embeddable data URI.
//!
//! Every image, no matter whether it arrived through the file picker, a
//! clipboard paste, or a drop, runs the same linear stages:
//!
//! 1. read the blob into a data URI,
//! 2. decode it through an offscreen `<img>` element,
//! 3. scale it down to the configured width cap (never up) and re-encode
//!    it as lossy JPEG on an offscreen canvas,
//!
//! yielding a data URI the caller splices into the document. Any failure
//! maps to an [`IngestError`]; the editor stays usable and the user simply
//! retries. The scaling arithmetic is kept in [`target_dimensions`] so it
//! can be tested without a DOM.

use gloo_file::futures::read_as_data_url;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, File, HtmlCanvasElement, HtmlImageElement};

/// Encoded output format for recompressed images.
const OUTPUT_MIME: &str = "image/jpeg";

/// Terminal failure of one ingestion. All variants are recoverable from the
/// user's point of view; none leave partial state in the document.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("file is not an image")]
    UnsupportedType,
    #[error("file exceeds the configured byte ceiling")]
    TooLarge,
    #[error("file read failed")]
    Read,
    #[error("bitmap decode failed")]
    Decode,
    #[error("canvas re-encode failed")]
    Encode,
    #[error("ingestion watchdog fired")]
    Timeout,
}

impl IngestError {
    /// User-facing notice for this failure, shown as a toast.
    pub fn notice(&self) -> &'static str {
        match self {
            IngestError::UnsupportedType => "Solo se pueden insertar archivos de imagen.",
            IngestError::TooLarge => "La imagen supera el tamaño máximo permitido.",
            IngestError::Read => "No se pudo leer el archivo.",
            IngestError::Decode | IngestError::Encode => "La imagen no se pudo procesar.",
            IngestError::Timeout => "La imagen tardó demasiado en procesarse.",
        }
    }
}

pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Gate run before the pipeline starts: MIME filtering plus the host's
/// optional byte ceiling.
pub fn check_acceptable(file: &File, max_file_size: Option<f64>) -> Result<(), IngestError> {
    if !is_image_mime(&file.type_()) {
        return Err(IngestError::UnsupportedType);
    }
    if let Some(limit) = max_file_size {
        if file.size() > limit {
            return Err(IngestError::TooLarge);
        }
    }
    Ok(())
}

/// Raster dimensions for a decoded bitmap of `width` x `height`.
///
/// Resizes only when `width` strictly exceeds `max_width`: both dimensions
/// scale by `max_width / width`, and the height is truncated to whole
/// pixels only here, at raster-surface allocation. Narrower bitmaps pass
/// through untouched.
pub fn target_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width > max_width {
        let ratio = max_width as f64 / width as f64;
        (max_width, (height as f64 * ratio) as u32)
    } else {
        (width, height)
    }
}

/// Runs the full pipeline on one file and returns the recompressed data
/// URI ready for insertion.
pub async fn ingest(file: File, max_width: u32, quality: f64) -> Result<String, IngestError> {
    let blob = gloo_file::Blob::from(file);
    let data_url = read_as_data_url(&blob)
        .await
        .map_err(|_| IngestError::Read)?;
    let bitmap = decode(&data_url).await?;
    let (width, height) =
        target_dimensions(bitmap.natural_width(), bitmap.natural_height(), max_width);
    recompress(&bitmap, width, height, quality)
}

/// Decodes a data URI into a bitmap via an offscreen image element,
/// bridging its load/error events into a future.
async fn decode(data_url: &str) -> Result<HtmlImageElement, IngestError> {
    let image = HtmlImageElement::new().map_err(|_| IngestError::Decode)?;
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(data_url);
    JsFuture::from(loaded).await.map_err(|_| IngestError::Decode)?;
    Ok(image)
}

/// Draws the bitmap onto an offscreen canvas at the target size and
/// re-encodes it. `quality` goes to the encoder untouched.
fn recompress(
    bitmap: &HtmlImageElement,
    width: u32,
    height: u32,
    quality: f64,
) -> Result<String, IngestError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(IngestError::Encode)?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| IngestError::Encode)?
        .dyn_into()
        .map_err(|_| IngestError::Encode)?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into().ok())
        .ok_or(IngestError::Encode)?;
    context
        .draw_image_with_html_image_element_and_dw_and_dh(
            bitmap,
            0.0,
            0.0,
            width as f64,
            height as f64,
        )
        .map_err(|_| IngestError::Encode)?;

    canvas
        .to_data_url_with_type_and_encoder_options(OUTPUT_MIME, &JsValue::from_f64(quality))
        .map_err(|_| IngestError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_landscape_scales_to_cap() {
        // 2000x1000 against an 800px cap comes out as exactly 800x400.
        assert_eq!(target_dimensions(2000, 1000, 800), (800, 400));
    }

    #[test]
    fn narrow_image_is_never_upscaled() {
        assert_eq!(target_dimensions(400, 300, 800), (400, 300));
    }

    #[test]
    fn threshold_is_strict() {
        // Width equal to the cap does not trigger a resize.
        assert_eq!(target_dimensions(800, 600, 800), (800, 600));
        assert_eq!(target_dimensions(801, 600, 800).0, 800);
    }

    #[test]
    fn aspect_ratio_is_preserved() {
        for (w, h) in [(1600u32, 900u32), (3000, 2000), (1024, 768), (2560, 1081)] {
            let (tw, th) = target_dimensions(w, h, 800);
            let original = h as f64 / w as f64;
            let scaled = th as f64 / tw as f64;
            // Truncation to whole pixels costs at most one pixel of height.
            assert!((original - scaled).abs() <= 1.0 / tw as f64, "{}x{}", w, h);
        }
    }

    #[test]
    fn height_is_truncated_at_allocation() {
        // 1000x333 at cap 800: 333 * 0.8 = 266.4, truncated to 266.
        assert_eq!(target_dimensions(1000, 333, 800), (800, 266));
        // Within 1px of the rounded value, per the documented tolerance.
        let expected = (333f64 * 800f64 / 1000f64).round() as i64;
        assert!((expected - 266).abs() <= 1);
    }

    #[test]
    fn mime_filter_accepts_only_images() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/jpeg"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime("text/html"));
        assert!(!is_image_mime(""));
    }
}
