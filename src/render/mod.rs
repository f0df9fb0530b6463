// src/render/mod.rs
pub mod svg;

pub use self::svg::{scene_to_document, write_svg};
