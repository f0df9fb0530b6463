// src/math/algorithms/mod.rs

pub mod clipping;

pub use self::clipping::{ClippedCell, FrameClipper};
