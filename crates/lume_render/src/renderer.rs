//! Renderer driver: pixel iteration, sub-pixel sampling, averaging.

use crate::{shade, Camera, Hittable, ShadeMode};
use lume_math::{gen_range, Color};
use rand::RngCore;
use thiserror::Error;

/// Configuration errors surfaced before any pixel is shaded.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    /// The viewport mapping divides by (dimension - 1)
    #[error("image dimensions must be at least 2x2, got {width}x{height}")]
    ImageTooSmall { width: u32, height: u32 },
    #[error("samples per pixel must be at least 1")]
    NoSamples,
    #[error("reject rate must lie in [0, 1), got {0}")]
    InvalidRejectRate(f32),
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Sub-pixel samples averaged per pixel
    pub samples_per_pixel: u32,
    /// Half-range of the sub-pixel jitter offsets; 0 samples every pixel
    /// exactly at its center
    pub jitter: f32,
    /// Integrator recursion mode
    pub mode: ShadeMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 270,
            samples_per_pixel: 16,
            jitter: 0.5,
            mode: ShadeMode::DepthLimited { max_depth: 50 },
        }
    }
}

impl RenderConfig {
    /// Fail fast on configurations the pixel mapping cannot express.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width < 2 || self.height < 2 {
            return Err(RenderError::ImageTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::NoSamples);
        }
        if let ShadeMode::Rejection { reject_rate } = self.mode {
            if !(0.0..1.0).contains(&reject_rate) {
                return Err(RenderError::InvalidRejectRate(reject_rate));
            }
        }
        Ok(())
    }
}

/// Linear-radiance pixel buffer, row 0 at the top of the image.
pub struct Film {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Color>,
}

impl Film {
    /// Create a new film filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y), y counted from the top scanline.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// All pixels in row-major order, top scanline first.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

/// Render the scene to a film of linear radiance.
///
/// The N sub-pixel offsets are drawn once up front and the same offsets are
/// reused at every pixel, so sample count, not pixel position, controls the
/// jitter pattern.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Result<Film, RenderError> {
    config.validate()?;

    let offsets: Vec<(f32, f32)> = (0..config.samples_per_pixel)
        .map(|_| {
            (
                gen_range(rng, -config.jitter, config.jitter),
                gen_range(rng, -config.jitter, config.jitter),
            )
        })
        .collect();
    let scale = 1.0 / config.samples_per_pixel as f32;

    let mut film = Film::new(config.width, config.height);
    for row in 0..config.height {
        // Scanline h counts up from the image bottom
        let h = config.height - 1 - row;
        for w in 0..config.width {
            let mut color = Color::ZERO;
            for &(dx, dy) in &offsets {
                let x = (w as f32 + dx) / (config.width - 1) as f32 * 2.0 - 1.0;
                let y = (h as f32 + dy) / (config.height - 1) as f32 * 2.0 - 1.0;
                let ray = camera.get_ray_xy(x, y, rng);
                color += shade(&ray, world, config.mode, rng);
            }
            film.set(w, row, color * scale);
        }
        log::debug!("scanline {}/{} shaded", row + 1, config.height);
    }

    Ok(film)
}
