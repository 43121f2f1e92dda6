use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use tracing::debug;

use crate::core::bbox::BoundingBox;
use crate::core::classify::BackgroundClassifier;

/// Tight box around every pixel the classifier rejects as background.
///
/// Returns `None` for zero-area images and for images that are all background.
pub fn find_foreground_bounds<C>(image: &DynamicImage, classifier: &C) -> Option<BoundingBox>
where
    C: BackgroundClassifier + ?Sized,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        debug!("Zero-area image {}x{}, nothing to classify", width, height);
        return None;
    }

    let rgba = image.to_rgba8();
    let bounds = scan_rows(&rgba, classifier, cfg!(feature = "parallel"));
    debug!("Foreground bounds of {}x{} image: {:?}", width, height, bounds);
    bounds
}

/// Foreground box grown by `padding` on each side and clipped to the image.
///
/// `None` means no foreground was found; callers fall back to the full image.
pub fn compute_crop_box<C>(image: &DynamicImage, classifier: &C, padding: u32) -> Option<BoundingBox>
where
    C: BackgroundClassifier + ?Sized,
{
    let (width, height) = image.dimensions();
    find_foreground_bounds(image, classifier).map(|b| b.pad_and_clip(padding, width, height))
}

/// Copy of the pixels inside `bbox`, in the source colour type.
///
/// The box is clipped to the image first; if nothing remains the whole image
/// is copied.
pub fn apply_crop(image: &DynamicImage, bbox: &BoundingBox) -> DynamicImage {
    let (width, height) = image.dimensions();
    match bbox.clip_to(width, height) {
        Some(b) => {
            let (x, y, w, h) = b.as_xywh();
            image.crop_imm(x, y, w, h)
        }
        None => image.clone(),
    }
}

fn scan_rows<C>(rgba: &RgbaImage, classifier: &C, parallel: bool) -> Option<BoundingBox>
where
    C: BackgroundClassifier + ?Sized,
{
    let stride = rgba.width() as usize * 4;
    let data = &rgba.as_raw()[..stride * rgba.height() as usize];

    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return data
            .par_chunks_exact(stride)
            .enumerate()
            .filter_map(|(y, row)| row_bounds(classifier, y as u32, row))
            .reduce_with(|a, b| a.union(&b));
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    data.chunks_exact(stride)
        .enumerate()
        .filter_map(|(y, row)| row_bounds(classifier, y as u32, row))
        .reduce(|a, b| a.union(&b))
}

/// Leftmost and rightmost foreground pixel of one row, as a one-row box.
fn row_bounds<C>(classifier: &C, y: u32, row: &[u8]) -> Option<BoundingBox>
where
    C: BackgroundClassifier + ?Sized,
{
    let is_foreground = |x: usize, px: &[u8]| {
        !classifier.is_background(x as u32, y, Rgba([px[0], px[1], px[2], px[3]]))
    };
    let left = row
        .chunks_exact(4)
        .enumerate()
        .position(|(x, px)| is_foreground(x, px))?;
    let right = row
        .chunks_exact(4)
        .enumerate()
        .rposition(|(x, px)| is_foreground(x, px))
        .unwrap_or(left);
    Some(BoundingBox::new(left as u32, y, right as u32 + 1, y + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify::{LuminanceThreshold, ReferenceDiff, SolidColor};
    use image::{GrayImage, Luma, RgbImage};

    fn white_rgba(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn all_white_has_no_foreground() {
        let img = DynamicImage::ImageRgba8(white_rgba(100, 100));
        assert_eq!(compute_crop_box(&img, &LuminanceThreshold::new(250), 10), None);
    }

    #[test]
    fn single_black_pixel_with_padding() {
        let mut buf = white_rgba(100, 100);
        buf.put_pixel(50, 50, Rgba([0, 0, 0, 255]));
        let img = DynamicImage::ImageRgba8(buf);
        assert_eq!(
            compute_crop_box(&img, &LuminanceThreshold::new(250), 10),
            Some(BoundingBox::new(40, 40, 61, 61))
        );
    }

    #[test]
    fn corner_pixel_padding_clamps_to_full_image() {
        let mut buf = white_rgba(10, 10);
        buf.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        let img = DynamicImage::ImageRgba8(buf);
        assert_eq!(
            compute_crop_box(&img, &LuminanceThreshold::new(250), 20),
            Some(BoundingBox::full(10, 10))
        );
    }

    #[test]
    fn reference_diff_encloses_red_square() {
        let mut buf = white_rgba(40, 30);
        for y in 12..17 {
            for x in 7..12 {
                buf.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }
        let img = DynamicImage::ImageRgba8(buf);
        let reference = ReferenceDiff::solid(40, 30, Rgba([255, 255, 255, 255]));
        assert_eq!(
            find_foreground_bounds(&img, &reference),
            Some(BoundingBox::new(7, 12, 12, 17))
        );
        assert_eq!(
            compute_crop_box(&img, &reference, 0),
            Some(BoundingBox::new(7, 12, 12, 17))
        );
    }

    #[test]
    fn zero_area_image_is_empty() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(0, 5));
        assert_eq!(compute_crop_box(&img, &SolidColor::white(), 3), None);
        let img = DynamicImage::ImageRgba8(RgbaImage::new(5, 0));
        assert_eq!(compute_crop_box(&img, &SolidColor::white(), 3), None);
    }

    #[test]
    fn luma_images_are_classified_by_grey_level() {
        let mut buf = GrayImage::from_pixel(20, 20, Luma([245]));
        buf.put_pixel(3, 15, Luma([10]));
        buf.put_pixel(17, 4, Luma([10]));
        let img = DynamicImage::ImageLuma8(buf);
        assert_eq!(
            find_foreground_bounds(&img, &LuminanceThreshold::new(240)),
            Some(BoundingBox::new(3, 4, 18, 16))
        );
        // off-white backdrop counts as content once the threshold exceeds it
        assert_eq!(
            find_foreground_bounds(&img, &LuminanceThreshold::new(250)),
            Some(BoundingBox::full(20, 20))
        );
        assert_eq!(find_foreground_bounds(&img, &LuminanceThreshold::new(0)), None);
    }

    #[test]
    fn parallel_and_sequential_scans_agree() {
        let mut buf = white_rgba(64, 48);
        for &(x, y) in &[(5u32, 40u32), (60, 2), (33, 33), (0, 20)] {
            buf.put_pixel(x, y, Rgba([20, 20, 20, 255]));
        }
        let classifier = LuminanceThreshold::new(250);
        let expected = Some(BoundingBox::new(0, 2, 61, 41));
        assert_eq!(scan_rows(&buf, &classifier, false), expected);
        assert_eq!(scan_rows(&buf, &classifier, true), expected);
    }

    #[test]
    fn apply_crop_copies_exact_region_and_keeps_colour_type() {
        let mut buf = RgbImage::from_pixel(8, 6, image::Rgb([255, 255, 255]));
        buf.put_pixel(2, 1, image::Rgb([1, 2, 3]));
        buf.put_pixel(4, 3, image::Rgb([4, 5, 6]));
        let img = DynamicImage::ImageRgb8(buf);

        let cropped = apply_crop(&img, &BoundingBox::new(2, 1, 5, 4));
        assert_eq!(cropped.dimensions(), (3, 3));
        let rgb = cropped.as_rgb8().expect("colour type preserved");
        assert_eq!(rgb.get_pixel(0, 0).0, [1, 2, 3]);
        assert_eq!(rgb.get_pixel(2, 2).0, [4, 5, 6]);

        // source is untouched
        assert_eq!(img.dimensions(), (8, 6));
    }

    #[test]
    fn apply_crop_clips_oversized_box() {
        let img = DynamicImage::ImageRgba8(white_rgba(10, 10));
        let cropped = apply_crop(&img, &BoundingBox::new(5, 5, 50, 50));
        assert_eq!(cropped.dimensions(), (5, 5));
        let whole = apply_crop(&img, &BoundingBox::new(20, 20, 30, 30));
        assert_eq!(whole.dimensions(), (10, 10));
    }

    #[test]
    fn closure_classifier_drives_the_scan() {
        let img = DynamicImage::ImageRgba8(white_rgba(10, 10));
        let diagonal = |x: u32, y: u32, _p: Rgba<u8>| x != y || x < 3 || x > 6;
        assert_eq!(
            find_foreground_bounds(&img, &diagonal),
            Some(BoundingBox::new(3, 3, 7, 7))
        );
    }
}
