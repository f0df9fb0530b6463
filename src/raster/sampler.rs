// src/raster/sampler.rs

//! # Colour Sampling
//!
//! Average colour of every pixel centre strictly inside a cell. Iteration is
//! bounded by the cell's precomputed bounding box and clipped to the raster.

use super::{color::Rgb, source::RasterSource};
use crate::math::{algorithms::ClippedCell, geometry::GeometryKernel, types::Point};
use crate::pipeline::cancellation::{CancellationToken, Cancelled};
use rayon::prelude::*;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, Default)]
pub struct ColorSampler;

impl ColorSampler {
    pub fn new() -> Self {
        Self
    }

    /// Mean colour of a single cell, channels truncated to integers.
    ///
    /// A cell that contains no pixel coordinate at all is sampled as black.
    pub fn average_color<K, R>(&self, kernel: &K, raster: &R, cell: &ClippedCell) -> Rgb
    where
        K: GeometryKernel + ?Sized,
        R: RasterSource + ?Sized,
    {
        let Some(span) = cell.bounds.pixel_span(raster.width(), raster.height()) else {
            trace!(
                "ColorSampler: cell {}/{} lies outside the raster",
                cell.seed_index,
                cell.sub_index
            );
            return Rgb::BLACK;
        };

        let mut sum = [0u64; 3];
        let mut count = 0u64;
        for y in span.y.clone() {
            for x in span.x.clone() {
                if !kernel.contains(&cell.polygon, Point::new(x as f64, y as f64)) {
                    continue;
                }
                let pixel = raster.pixel(x, y);
                sum[0] += pixel.r as u64;
                sum[1] += pixel.g as u64;
                sum[2] += pixel.b as u64;
                count += 1;
            }
        }

        if count == 0 {
            trace!(
                "ColorSampler: cell {}/{} contains no pixel, using black",
                cell.seed_index,
                cell.sub_index
            );
            return Rgb::BLACK;
        }

        Rgb::new(
            (sum[0] / count) as u8,
            (sum[1] / count) as u8,
            (sum[2] / count) as u8,
        )
    }

    /// Samples all cells in parallel; the result has the same order as `cells`.
    ///
    /// The token is checked before each cell. Once it trips, remaining cells
    /// are skipped and the whole batch fails.
    pub fn sample_all<K, R>(
        &self,
        kernel: &K,
        raster: &R,
        cells: &[ClippedCell],
        token: &CancellationToken,
    ) -> Result<Vec<Rgb>, Cancelled>
    where
        K: GeometryKernel + ?Sized,
        R: RasterSource + ?Sized,
    {
        token.check()?;
        let colors = cells
            .par_iter()
            .map(|cell| {
                token.check()?;
                Ok(self.average_color(kernel, raster, cell))
            })
            .collect::<Result<Vec<_>, Cancelled>>()?;

        debug!(
            "ColorSampler: sampled {} cells on a {}x{} raster",
            colors.len(),
            raster.width(),
            raster.height()
        );
        Ok(colors)
    }
}
