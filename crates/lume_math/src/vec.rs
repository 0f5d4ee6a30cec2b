//! Vector helpers shared by geometry and shading.

use crate::Vec3;

/// A point in 3D space.
pub type Point3 = Vec3;

/// RGB color type alias (linear radiance, unclamped).
pub type Color = Vec3;

/// Linear interpolation between `begin` and `end`.
///
/// `t` is not clamped, so values outside [0, 1] extrapolate.
#[inline]
pub fn lerp(begin: Vec3, end: Vec3, t: f32) -> Vec3 {
    (1.0 - t) * begin + t * end
}

/// Reflect a vector about a unit normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through a surface with unit normal `n`.
///
/// `eta_ratio` is the refractive index of the incident medium over that of
/// the transmitting medium. The incoming vector's length is preserved.
/// Callers must rule out total internal reflection first: the refracted
/// parallel component must fit under the unit hemisphere.
#[inline]
pub fn refract(v: Vec3, n: Vec3, eta_ratio: f32) -> Vec3 {
    let length = v.length();
    let unit = v / length;
    let cos_theta = (-unit).dot(n);
    let in_perp = -cos_theta * n;
    let in_para = unit - in_perp;
    let out_para = eta_ratio * in_para;
    let out_perp = -(1.0 - out_para.length_squared()).sqrt() * n;
    length * (out_para + out_perp)
}
