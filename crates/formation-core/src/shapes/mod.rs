//! Spatial layout generators.
//!
//! Each generator maps `(index, total, params)` to a 3D target point, using
//! an injected RNG for its randomized terms so callers can seed determinism.
//! The cone family lives in `tree`; `star`, `halo`, `ground`, `glyph` and
//! `sculpt` cover the decorative layouts; `dispatcher` selects among them.

pub mod dispatcher;
pub mod glyph;
pub mod ground;
pub mod halo;
pub mod sculpt;
pub mod star;
pub mod tree;
