//! Image triage rules.
//!
//! Classifies an uploaded track image as defective or clear. The rules
//! run in a fixed order and the first match wins:
//!
//! 1. Filename triggers ("crack", "tree"/"branch"/"debris") - these fire
//!    before the image is decoded, so they hold regardless of content.
//! 2. Green-pixel ratio above [`GREEN_RATIO_THRESHOLD`] - foliage proxy.
//! 3. Mean absolute horizontal Sobel magnitude on the red channel above
//!    [`EDGE_MEAN_THRESHOLD`] - discontinuity proxy.
//! 4. Default: no visible defect.
//!
//! The attached probabilities are fixed per rule, not calibrated.

use crate::models::DefectAssessment;
use image::RgbImage;
use thiserror::Error;

/// Green-ratio cut-off above which an image is labelled an obstruction.
pub const GREEN_RATIO_THRESHOLD: f64 = 0.10;

/// Edge-magnitude cut-off above which an image is labelled a possible crack.
pub const EDGE_MEAN_THRESHOLD: f64 = 5.0;

/// Errors that can occur while analyzing an uploaded image.
#[derive(Debug, Error)]
pub enum ImageTriageError {
    /// The uploaded bytes could not be decoded as an image.
    #[error("{0}")]
    Decode(#[from] image::ImageError),
}

/// Runs the triage rules over an uploaded image.
///
/// Never fails: decode errors are folded into a degraded assessment
/// with probability 0 and the error text in the label, which is the
/// contract the operator dashboard expects.
///
/// # Example
///
/// ```
/// use shared::triage::assess_image;
///
/// // Filename triggers fire before decoding.
/// let assessment = assess_image("crack_zone4.jpg", b"not an image");
/// assert_eq!(assessment.defect_type, "Crack detected");
/// ```
#[must_use]
pub fn assess_image(filename: &str, bytes: &[u8]) -> DefectAssessment {
    let filename = filename.to_lowercase();

    if filename.contains("crack") {
        return DefectAssessment::new(0.87, "Crack detected");
    }
    if ["tree", "branch", "debris"]
        .iter()
        .any(|t| filename.contains(t))
    {
        return DefectAssessment::new(0.95, "Obstruction on track");
    }

    let img = match decode_rgb(bytes) {
        Ok(img) => img,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode uploaded image");
            return DefectAssessment::could_not_analyze(e);
        }
    };

    if green_ratio(&img) > GREEN_RATIO_THRESHOLD {
        return DefectAssessment::new(0.95, "Obstruction on track (tree/branch/debris detected)");
    }

    if edge_mean(&img) > EDGE_MEAN_THRESHOLD {
        return DefectAssessment::new(0.75, "Possible crack or discontinuity detected");
    }

    DefectAssessment::new(0.01, "No visible defect")
}

/// Decodes uploaded bytes into an RGB8 pixel grid.
///
/// # Errors
///
/// Returns an error if the bytes are not a recognizable image format.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, ImageTriageError> {
    Ok(image::load_from_memory(bytes)?.to_rgb8())
}

/// Fraction of pixels with a dominant green channel.
///
/// A pixel counts as green when green > 120 and both red and blue are
/// below 100.
#[must_use]
pub fn green_ratio(img: &RgbImage) -> f64 {
    let total = u64::from(img.width()) * u64::from(img.height());
    if total == 0 {
        return 0.0;
    }

    let green = img
        .pixels()
        .filter(|p| p[1] > 120 && p[0] < 100 && p[2] < 100)
        .count();

    green as f64 / total as f64
}

/// Mean absolute horizontal-gradient magnitude over the red channel.
///
/// Applies a 3x3 horizontal Sobel kernel to the interior pixels; images
/// narrower than the kernel have no interior and score 0.
#[must_use]
pub fn edge_mean(img: &RgbImage) -> f64 {
    let (w, h) = (img.width() as usize, img.height() as usize);
    if w < 3 || h < 3 {
        return 0.0;
    }

    let red = |x: usize, y: usize| f64::from(img.get_pixel(x as u32, y as u32)[0]);

    let mut sum = 0.0;
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let gx = (red(x + 1, y - 1) - red(x - 1, y - 1))
                + 2.0 * (red(x + 1, y) - red(x - 1, y))
                + (red(x + 1, y + 1) - red(x - 1, y + 1));
            sum += gx.abs();
        }
    }

    sum / ((w - 2) * (h - 2)) as f64
}
