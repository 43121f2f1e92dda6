use std::io;
use std::path::Path;

use image::{DynamicImage, GenericImageView};
use tracing::{debug, warn};

use crate::error::Result;

pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        warn!("Source file does not exist: {:?}", path);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("source file does not exist: {}", path.display()),
        )
        .into());
    }
    let image = image::open(path)?;
    let (width, height) = image.dimensions();
    debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        width,
        height,
        image.color()
    );
    Ok(image)
}

/// Encode `image` to `path`, creating missing parent directories.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    image.save(path)?;
    debug!("Encoded {}x{} image to {:?}", image.width(), image.height(), path);
    Ok(())
}
