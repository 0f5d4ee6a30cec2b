//! Random direction sampling.
//!
//! All generators draw from an explicit `RngCore` handle so callers control
//! seeding and can keep one generator per thread.

use crate::Vec3;
use rand::{Rng, RngCore};
use std::f32::consts::PI;

/// Uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform f32 in [min, max).
#[inline]
pub fn gen_range(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// Uniform point in the axis-aligned box [min, max)^3.
pub fn random_in_box(rng: &mut dyn RngCore, min: f32, max: f32) -> Vec3 {
    Vec3::new(
        gen_range(rng, min, max),
        gen_range(rng, min, max),
        gen_range(rng, min, max),
    )
}

/// Point inside the z=0 disk of radius `max_radius`.
///
/// x is drawn uniformly, then y uniformly within the circle border at that
/// x. Denser near the horizontal axis than a true uniform disk; kept as the
/// lens sampler's distribution.
pub fn random_in_unit_disk(rng: &mut dyn RngCore, max_radius: f32) -> Vec3 {
    let x = gen_range(rng, -max_radius, max_radius);
    let border = (max_radius * max_radius - x * x).sqrt();
    let y = gen_range(rng, -border, border);
    Vec3::new(x, y, 0.0)
}

/// Point on the sphere of the given radius by spherical angles.
///
/// Azimuth in [0, 2pi), polar in [0, pi). Clusters toward the poles rather
/// than being area-uniform; the scattering models are calibrated against
/// this distribution, so it stays.
pub fn random_on_sphere(rng: &mut dyn RngCore, radius: f32) -> Vec3 {
    let phi = gen_range(rng, 0.0, 2.0 * PI);
    let theta = gen_range(rng, 0.0, PI);
    Vec3::new(
        radius * theta.sin() * phi.cos(),
        radius * theta.sin() * phi.sin(),
        radius * theta.cos(),
    )
}

/// Near-uniform point on the sphere by cylindrical-z sampling.
///
/// z uniform in [-1, 1], azimuth uniform, radius from the slice width.
pub fn random_on_pillar(rng: &mut dyn RngCore, radius: f32) -> Vec3 {
    let z = gen_range(rng, -1.0, 1.0);
    let phi = gen_range(rng, 0.0, 2.0 * PI);
    let r = (1.0 - z * z).sqrt();
    Vec3::new(radius * r * phi.cos(), radius * r * phi.sin(), radius * z)
}

/// Sphere sample mirrored into the hemisphere around `axis`.
pub fn random_in_hemisphere(rng: &mut dyn RngCore, radius: f32, axis: Vec3) -> Vec3 {
    let vec = random_on_sphere(rng, radius);
    if vec.dot(axis) < 0.0 {
        -vec
    } else {
        vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gen_range_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let x = gen_range(&mut rng, -2.0, 3.0);
            assert!((-2.0..3.0).contains(&x));
        }
    }

    #[test]
    fn test_random_in_box_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            let v = random_in_box(&mut rng, 0.5, 1.0);
            for c in v.to_array() {
                assert!((0.5..1.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_random_in_unit_disk_inside() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let p = random_in_unit_disk(&mut rng, 1.0);
            assert_eq!(p.z, 0.0);
            assert!(p.length_squared() <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn test_random_on_sphere_radius() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..1000 {
            let v = random_on_sphere(&mut rng, 2.5);
            assert!((v.length() - 2.5).abs() < 1e-3);
        }
    }

    #[test]
    fn test_random_on_pillar_radius() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let v = random_on_pillar(&mut rng, 1.0);
            assert!((v.length() - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_random_in_hemisphere_side() {
        let mut rng = StdRng::seed_from_u64(6);
        let axis = Vec3::new(0.0, 1.0, 0.0);
        for _ in 0..1000 {
            let v = random_in_hemisphere(&mut rng, 1.0, axis);
            assert!(v.dot(axis) >= 0.0);
        }
    }
}
