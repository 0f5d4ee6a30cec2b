//! Linear radiance to 8-bit channel encoding.

use crate::Film;
use lume_math::Color;

const INV_GAMMA: f32 = 1.0 / 2.2;

/// Output transfer policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Encoding {
    /// Linear values scaled straight to [0, 255]
    Direct,
    /// Power 1/2.2 gamma
    Gamma,
    /// Exponential tone map 1 - exp(-v * exposure), then gamma
    Hdr { exposure: f32 },
}

/// Encode one linear RGB triple to 8-bit channels.
///
/// Returns the clamped triple and whether all channels were already in
/// gamut. Out-of-gamut input is non-fatal; it is clamped and flagged.
pub fn encode(color: Color, encoding: Encoding) -> ([u8; 3], bool) {
    let map = |v: f32| -> i32 {
        let v = match encoding {
            Encoding::Direct => v,
            Encoding::Gamma => v.powf(INV_GAMMA),
            Encoding::Hdr { exposure } => (1.0 - (-v * exposure).exp()).powf(INV_GAMMA),
        };
        (255.999 * v) as i32
    };

    let channels = [map(color.x), map(color.y), map(color.z)];
    let in_gamut = channels.iter().all(|c| (0..=255).contains(c));
    (channels.map(|c| c.clamp(0, 255) as u8), in_gamut)
}

impl Film {
    /// Encode the film to packed RGB bytes.
    ///
    /// Returns the bytes plus the count of out-of-gamut pixels, which were
    /// clamped and warned about.
    pub fn to_rgb8(&self, encoding: Encoding) -> (Vec<u8>, usize) {
        let mut bytes = Vec::with_capacity(self.pixels().len() * 3);
        let mut out_of_gamut = 0;
        for &pixel in self.pixels() {
            let (rgb, in_gamut) = encode(pixel, encoding);
            if !in_gamut {
                out_of_gamut += 1;
            }
            bytes.extend_from_slice(&rgb);
        }
        warn_out_of_gamut(out_of_gamut, self.pixels().len());
        (bytes, out_of_gamut)
    }

    /// Encode the film to packed RGBA bytes (opaque alpha).
    pub fn to_rgba8(&self, encoding: Encoding) -> (Vec<u8>, usize) {
        let mut bytes = Vec::with_capacity(self.pixels().len() * 4);
        let mut out_of_gamut = 0;
        for &pixel in self.pixels() {
            let (rgb, in_gamut) = encode(pixel, encoding);
            if !in_gamut {
                out_of_gamut += 1;
            }
            bytes.extend_from_slice(&rgb);
            bytes.push(255);
        }
        warn_out_of_gamut(out_of_gamut, self.pixels().len());
        (bytes, out_of_gamut)
    }

    /// Encode and save the film with the `image` crate; the extension
    /// picks the format.
    pub fn save(
        &self,
        path: impl AsRef<std::path::Path>,
        encoding: Encoding,
    ) -> image::ImageResult<()> {
        let (bytes, _) = self.to_rgba8(encoding);
        let buffer = image::RgbaImage::from_raw(self.width, self.height, bytes)
            .ok_or_else(|| {
                image::ImageError::Parameter(image::error::ParameterError::from_kind(
                    image::error::ParameterErrorKind::DimensionMismatch,
                ))
            })?;
        buffer.save(path)
    }
}

fn warn_out_of_gamut(count: usize, total: usize) {
    if count > 0 {
        log::warn!("{count} of {total} pixels were out of gamut and clamped");
    }
}
