// src/pipeline/error.rs
use super::cancellation::Cancelled;
use crate::math::error::MathError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// Ungültiger Rahmen oder ungültige Konfiguration.
    #[error("Scene construction failed: {0}")]
    Construction(#[from] MathError),

    #[error("Cannot load raster '{path}': {source}")]
    Resource {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Cannot read config '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse config '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot write output '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
