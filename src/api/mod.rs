//! High-level, ergonomic library API: crop an in-memory image, crop against an
//! explicit reference image, or crop a file on disk into another file. Prefer
//! these entrypoints over the low-level `core` modules when integrating.
use std::path::Path;

use image::{DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::bbox::BoundingBox;
use crate::core::classify::{BackgroundClassifier, DiffAmplify, ReferenceDiff};
use crate::core::crop::{apply_crop, find_foreground_bounds};
use crate::core::params::CropParams;
use crate::error::{Error, Result};
use crate::io::{load_image, save_image};

/// What a crop call did to its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CropOutcome {
    /// Content was found; `bounds` is the tight box, `padded` the region kept
    Cropped {
        bounds: BoundingBox,
        padded: BoundingBox,
    },
    /// No foreground; the image was returned as-is
    Unchanged,
}

impl CropOutcome {
    /// Region of the source image the output covers.
    pub fn region(&self, width: u32, height: u32) -> BoundingBox {
        match self {
            CropOutcome::Cropped { padded, .. } => *padded,
            CropOutcome::Unchanged => BoundingBox::full(width, height),
        }
    }

    pub fn is_cropped(&self) -> bool {
        matches!(self, CropOutcome::Cropped { .. })
    }
}

/// Crop with any classifier, falling back to the full image when no
/// foreground is found.
pub fn crop_with_classifier<C>(
    image: &DynamicImage,
    classifier: &C,
    padding: u32,
) -> (DynamicImage, CropOutcome)
where
    C: BackgroundClassifier + ?Sized,
{
    let (width, height) = image.dimensions();
    match find_foreground_bounds(image, classifier) {
        Some(bounds) => {
            let padded = bounds.pad_and_clip(padding, width, height);
            debug!("Foreground {} padded by {} to {}", bounds, padding, padded);
            (
                apply_crop(image, &padded),
                CropOutcome::Cropped { bounds, padded },
            )
        }
        None => (image.clone(), CropOutcome::Unchanged),
    }
}

/// Crop an in-memory image using `params`
pub fn crop_image(image: &DynamicImage, params: &CropParams) -> (DynamicImage, CropOutcome) {
    let classifier = params.strategy.classifier_for(image);
    debug!("Cropping with strategy {}, padding {}", params.strategy, params.padding);
    crop_with_classifier(image, classifier.as_ref(), params.padding)
}

/// Crop `image` against a caller-supplied background `reference` of the same size.
pub fn crop_with_reference(
    image: &DynamicImage,
    reference: &DynamicImage,
    amplify: Option<DiffAmplify>,
    padding: u32,
) -> Result<(DynamicImage, CropOutcome)> {
    let mut classifier = ReferenceDiff::new(reference.to_rgba8());
    if let Some(amp) = amplify {
        amp.validate()?;
        classifier = classifier.with_amplify(amp);
    }

    let (width, height) = image.dimensions();
    let (ref_width, ref_height) = classifier.dimensions();
    if (width, height) != (ref_width, ref_height) {
        return Err(Error::DimensionMismatch {
            width,
            height,
            ref_width,
            ref_height,
        });
    }
    Ok(crop_with_classifier(image, &classifier, padding))
}

/// Decode `input`, crop it with `params`, and encode the result to `output`.
/// When no content is found the original image is saved unchanged.
pub fn crop_file_to_path(input: &Path, output: &Path, params: &CropParams) -> Result<CropOutcome> {
    params.validate()?;
    let image = load_image(input)?;
    let (cropped, outcome) = crop_image(&image, params);
    save_image(&cropped, output)?;

    match outcome {
        CropOutcome::Cropped { bounds, padded } => info!(
            "Cropped to {} (with padding {}) and saved to {:?}",
            bounds, padded, output
        ),
        CropOutcome::Unchanged => info!(
            "No content found to crop, saved original to {:?}",
            output
        ),
    }
    Ok(outcome)
}
