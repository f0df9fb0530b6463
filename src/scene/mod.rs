// src/scene/mod.rs
pub mod assembler;
pub mod model;

pub use assembler::{AnimationSettings, SceneAssembler};
pub use model::{
    FrameOutline, GradientStop, HueCycle, Motion, Role, RotationOscillation, ScaleOscillation,
    Scene, SceneCell, Shadow,
};
