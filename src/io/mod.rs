//! File glue around the cropping core: decode an image from disk and encode
//! the result back. Formats are chosen by the `image` crate from the path.
pub mod image_file;
pub use image_file::{load_image, save_image};
