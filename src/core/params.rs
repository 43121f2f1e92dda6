use std::path::Path;

use image::{DynamicImage, GenericImageView, Rgba};
use serde::{Deserialize, Serialize};

use crate::core::classify::{
    BackgroundClassifier, DiffAmplify, LuminanceThreshold, ReferenceDiff, SolidColor,
};
use crate::error::Result;

/// How background pixels are recognised
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackgroundStrategy {
    /// Compare against a solid reference image of the input's size
    Reference {
        color: [u8; 4],
        #[serde(default)]
        amplify: Option<DiffAmplify>,
    },
    /// Exact match against one colour
    SolidColor {
        color: [u8; 4],
        #[serde(default)]
        compare_alpha: bool,
    },
    /// Grey level at or above `threshold` is background
    Luminance { threshold: u8 },
}

impl BackgroundStrategy {
    /// Build the classifier this strategy describes for `image`.
    pub fn classifier_for(&self, image: &DynamicImage) -> Box<dyn BackgroundClassifier> {
        match *self {
            BackgroundStrategy::Reference { color, amplify } => {
                let (width, height) = image.dimensions();
                let reference = ReferenceDiff::solid(width, height, Rgba(color));
                match amplify {
                    Some(amp) => Box::new(reference.with_amplify(amp)),
                    None => Box::new(reference),
                }
            }
            BackgroundStrategy::SolidColor {
                color,
                compare_alpha,
            } => {
                let solid = SolidColor::new(Rgba(color));
                if compare_alpha {
                    Box::new(solid.with_alpha())
                } else {
                    Box::new(solid)
                }
            }
            BackgroundStrategy::Luminance { threshold } => {
                Box::new(LuminanceThreshold::new(threshold))
            }
        }
    }
}

impl std::fmt::Display for BackgroundStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackgroundStrategy::Reference { amplify: None, .. } => write!(f, "Reference"),
            BackgroundStrategy::Reference { amplify: Some(_), .. } => {
                write!(f, "Reference(amplified)")
            }
            BackgroundStrategy::SolidColor { .. } => write!(f, "SolidColor"),
            BackgroundStrategy::Luminance { threshold } => write!(f, "Luminance(>={})", threshold),
        }
    }
}

/// Cropping parameters suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropParams {
    /// Margin added on every side of the detected content before clipping
    pub padding: u32,
    pub strategy: BackgroundStrategy,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            padding: 10,
            strategy: BackgroundStrategy::Luminance { threshold: 250 },
        }
    }
}

impl CropParams {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: CropParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if let BackgroundStrategy::Reference {
            amplify: Some(amp), ..
        } = &self.strategy
        {
            amp.validate()?;
        }
        Ok(())
    }
}
