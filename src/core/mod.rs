//! Core cropping building blocks: background classifiers, bounding-box
//! arithmetic, the crop-box computation, and serialisable parameters.
//! These are the primitives consumed by the high-level `api` module.
pub mod bbox;
pub mod classify;
pub mod crop;
pub mod params;
