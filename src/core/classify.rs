//! Background classifiers: predicates telling backdrop pixels from content.
//!
//! Every classifier sees pixels as 8-bit RGBA together with their position, so
//! position-dependent strategies (comparison against a reference image) and
//! position-free ones (solid colour, luminance) share one interface.
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Decides whether a pixel belongs to the background.
///
/// Implemented for the three built-in strategies and for any
/// `Fn(u32, u32, Rgba<u8>) -> bool + Sync` closure.
pub trait BackgroundClassifier: Sync {
    fn is_background(&self, x: u32, y: u32, pixel: Rgba<u8>) -> bool;
}

impl<F> BackgroundClassifier for F
where
    F: Fn(u32, u32, Rgba<u8>) -> bool + Sync,
{
    fn is_background(&self, x: u32, y: u32, pixel: Rgba<u8>) -> bool {
        self(x, y, pixel)
    }
}

/// Remaps a channel difference `d` to `clamp((d + d) / scale + offset, 0, 255)`.
///
/// With `scale = 2.0` and `offset = -100` differences up to 100 collapse to zero
/// and larger ones pass through shifted down, which lets near-white
/// anti-aliasing fringes count as background.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DiffAmplify {
    pub scale: f32,
    pub offset: i32,
}

impl Default for DiffAmplify {
    fn default() -> Self {
        Self {
            scale: 2.0,
            offset: -100,
        }
    }
}

impl DiffAmplify {
    /// Reject a scale that cannot produce a meaningful remap.
    pub fn validate(&self) -> Result<()> {
        if self.scale == 0.0 || !self.scale.is_finite() {
            return Err(Error::InvalidParams {
                arg: "amplify.scale",
                value: self.scale.to_string(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn apply(&self, diff: u8) -> u8 {
        let v = (diff as f32 * 2.0) / self.scale + self.offset as f32;
        (v as i32).clamp(0, 255) as u8
    }
}

/// Background where the pixel matches a reference image at the same position.
///
/// Pixels outside the reference's extent have nothing to match and are
/// treated as foreground.
#[derive(Clone, Debug)]
pub struct ReferenceDiff {
    reference: RgbaImage,
    amplify: Option<DiffAmplify>,
}

impl ReferenceDiff {
    pub fn new(reference: RgbaImage) -> Self {
        Self {
            reference,
            amplify: None,
        }
    }

    /// Reference filled with a single colour, typically opaque white.
    pub fn solid(width: u32, height: u32, color: Rgba<u8>) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, color))
    }

    pub fn with_amplify(mut self, amplify: DiffAmplify) -> Self {
        self.amplify = Some(amplify);
        self
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.reference.dimensions()
    }
}

impl BackgroundClassifier for ReferenceDiff {
    fn is_background(&self, x: u32, y: u32, pixel: Rgba<u8>) -> bool {
        let Some(reference) = self.reference.get_pixel_checked(x, y) else {
            return false;
        };
        pixel.0.iter().zip(reference.0.iter()).all(|(&a, &b)| {
            let diff = a.abs_diff(b);
            match self.amplify {
                Some(amp) => amp.apply(diff) == 0,
                None => diff == 0,
            }
        })
    }
}

/// Background where the pixel equals one colour exactly.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SolidColor {
    color: Rgba<u8>,
    compare_alpha: bool,
}

impl SolidColor {
    /// Compares RGB only; alpha is ignored.
    pub fn new(color: Rgba<u8>) -> Self {
        Self {
            color,
            compare_alpha: false,
        }
    }

    pub fn white() -> Self {
        Self::new(Rgba([255, 255, 255, 255]))
    }

    /// Also require the alpha channel to match.
    pub fn with_alpha(mut self) -> Self {
        self.compare_alpha = true;
        self
    }
}

impl BackgroundClassifier for SolidColor {
    fn is_background(&self, _x: u32, _y: u32, pixel: Rgba<u8>) -> bool {
        if self.compare_alpha {
            pixel == self.color
        } else {
            pixel.0[..3] == self.color.0[..3]
        }
    }
}

/// Background where grey-level intensity is at or above a threshold.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct LuminanceThreshold {
    pub threshold: u8,
}

impl LuminanceThreshold {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }
}

impl BackgroundClassifier for LuminanceThreshold {
    fn is_background(&self, _x: u32, _y: u32, pixel: Rgba<u8>) -> bool {
        luminance(pixel) >= self.threshold
    }
}

/// ITU-R 601-2 luma in 16.16 fixed point; alpha is ignored.
#[inline]
pub fn luminance(pixel: Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}
