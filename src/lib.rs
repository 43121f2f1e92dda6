#![doc = r##"
autocrop — background-aware auto-cropping with padding.

Given a decoded image, this crate finds the tightest rectangle enclosing the
non-background content, grows it by a padding margin, clips it to the image,
and returns the cropped image. Images with no detectable content come back
unchanged.

Background is recognised by a pluggable classifier. Three strategies ship with
the crate:

- **Reference difference**: a pixel is background when it matches a reference
  image (typically solid white) at the same position, optionally after a
  difference-amplification step that ignores faint anti-aliasing fringes.
- **Solid colour**: a pixel is background when it equals one colour.
- **Luminance threshold**: a pixel is background when its grey level is at or
  above a threshold, which tolerates off-white backdrops.

Any `Fn(u32, u32, Rgba<u8>) -> bool + Sync` closure works as a classifier too.

Quick start: crop a file to another file
----------------------------------------
```rust,no_run
use std::path::Path;
use autocrop::{crop_file_to_path, BackgroundStrategy, CropOutcome, CropParams};

fn main() -> autocrop::Result<()> {
    let params = CropParams {
        padding: 10,
        strategy: BackgroundStrategy::Luminance { threshold: 250 },
    };

    match crop_file_to_path(Path::new("logo_raw.png"), Path::new("public/logo.png"), &params)? {
        CropOutcome::Cropped { bounds, padded } => println!("cropped {bounds} -> {padded}"),
        CropOutcome::Unchanged => println!("no content found, saved original"),
    }
    Ok(())
}
```

In-memory cropping with the low-level core
------------------------------------------
```rust
use autocrop::{apply_crop, compute_crop_box, BoundingBox, LuminanceThreshold};
use image::{DynamicImage, Rgba, RgbaImage};

let mut buf = RgbaImage::from_pixel(100, 100, Rgba([255, 255, 255, 255]));
buf.put_pixel(50, 50, Rgba([0, 0, 0, 255]));
let image = DynamicImage::ImageRgba8(buf);

let bbox = compute_crop_box(&image, &LuminanceThreshold::new(250), 10)
    .unwrap_or(BoundingBox::full(100, 100));
assert_eq!(bbox, BoundingBox::new(40, 40, 61, 61));

let cropped = apply_crop(&image, &bbox);
assert_eq!((cropped.width(), cropped.height()), (21, 21));
```

Parameters from a JSON preset
-----------------------------
```rust
use autocrop::CropParams;

let params = CropParams::from_json_str(r#"{
    "padding": 20,
    "strategy": { "kind": "reference", "color": [255, 255, 255, 255],
                  "amplify": { "scale": 2.0, "offset": -100 } }
}"#)?;
assert_eq!(params.padding, 20);
# Ok::<(), autocrop::Error>(())
```

Feature flags
-------------
- `parallel` (default): classify rows in parallel with rayon. Results are
  identical to the sequential scan.

Useful modules
--------------
- [`api`] — high-level entry points and [`CropOutcome`].
- [`core`](crate::core) — classifiers, bounding boxes, the crop computation, parameters.
- [`io`] — image decode/encode helpers.
- [`error`] — crate-level `Error` and `Result`.
- [`logging`] — optional `tracing` subscriber setup.
"##]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;

// Curated public API surface
pub use crate::core::bbox::BoundingBox;
pub use crate::core::classify::{
    BackgroundClassifier, DiffAmplify, LuminanceThreshold, ReferenceDiff, SolidColor, luminance,
};
pub use crate::core::crop::{apply_crop, compute_crop_box, find_foreground_bounds};
pub use crate::core::params::{BackgroundStrategy, CropParams};
pub use error::{Error, Result};

pub use api::{
    CropOutcome, crop_file_to_path, crop_image, crop_with_classifier, crop_with_reference,
};
pub use io::{load_image, save_image};
