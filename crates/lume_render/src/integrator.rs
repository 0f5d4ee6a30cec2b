//! Recursive Monte Carlo radiance estimation.

use crate::Hittable;
use lume_math::{gen_f32, lerp, Color, Interval, Ray};
use rand::RngCore;

/// Lower bound of every scene query, guarding against immediate
/// self-intersection of scattered rays.
pub const T_MIN_EPSILON: f32 = 1e-3;

/// Recursion control for the integrator; one mode per render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShadeMode {
    /// Unbounded recursion terminated by Russian roulette: every shade
    /// evaluation returns zero with probability `reject_rate` and scales
    /// surviving results by 1/(1 - reject_rate), unbiased in expectation.
    Rejection { reject_rate: f32 },
    /// Fixed recursion bound without rejection; truncation at the bound
    /// biases deep paths toward zero.
    DepthLimited { max_depth: u32 },
}

/// Background gradient keyed to the ray direction's vertical component,
/// remapped from [-1, 1] to [0, 1]: white at the horizon, blue at the
/// zenith.
pub fn background(ray: &Ray) -> Color {
    let dir = ray.direction.normalize();
    let t = 0.5 * (dir.y + 1.0);
    lerp(Color::new(1.0, 1.0, 1.0), Color::new(0.5, 0.7, 1.0), t)
}

/// Estimate the radiance carried back along a primary ray.
pub fn shade(ray: &Ray, world: &dyn Hittable, mode: ShadeMode, rng: &mut dyn RngCore) -> Color {
    match mode {
        ShadeMode::Rejection { reject_rate } => shade_rejection(ray, world, reject_rate, rng),
        ShadeMode::DepthLimited { max_depth } => shade_depth_limited(ray, world, max_depth, rng),
    }
}

fn shade_depth_limited(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    match world.hit(ray, Interval::new(T_MIN_EPSILON, f32::INFINITY)) {
        None => background(ray),
        Some(rec) => {
            if depth == 0 {
                return Color::ZERO;
            }
            match rec.material.scatter(ray, &rec, rng) {
                Some(result) => {
                    result.attenuation
                        * shade_depth_limited(&result.scattered, world, depth - 1, rng)
                }
                None => Color::ZERO,
            }
        }
    }
}

fn shade_rejection(
    ray: &Ray,
    world: &dyn Hittable,
    reject_rate: f32,
    rng: &mut dyn RngCore,
) -> Color {
    if gen_f32(rng) < reject_rate {
        return Color::ZERO;
    }
    let compensation = 1.0 / (1.0 - reject_rate);

    match world.hit(ray, Interval::new(T_MIN_EPSILON, f32::INFINITY)) {
        None => compensation * background(ray),
        Some(rec) => match rec.material.scatter(ray, &rec, rng) {
            Some(result) => {
                compensation
                    * result.attenuation
                    * shade_rejection(&result.scattered, world, reject_rate, rng)
            }
            None => Color::ZERO,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Metal, ObjectList, Sphere};
    use lume_math::{Point3, Vec3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn one_sphere_world() -> ObjectList {
        let mut world = ObjectList::new();
        world.add(Box::new(Sphere::new(
            Point3::new(0.0, 0.0, -2.0),
            0.5,
            Arc::new(Lambertian::new(Color::splat(0.5))),
        )));
        world
    }

    #[test]
    fn test_background_gradient_endpoints() {
        let up = Ray::new(Point3::ZERO, Vec3::Y);
        assert!((background(&up) - Color::new(0.5, 0.7, 1.0)).length() < 1e-5);

        let down = Ray::new(Point3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        assert!((background(&down) - Color::ONE).length() < 1e-5);
    }

    #[test]
    fn test_depth_zero_hit_is_black() {
        let world = one_sphere_world();
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rng = StdRng::seed_from_u64(30);

        let radiance = shade(&ray, &world, ShadeMode::DepthLimited { max_depth: 0 }, &mut rng);
        assert_eq!(radiance, Color::ZERO);
    }

    #[test]
    fn test_depth_zero_miss_is_background() {
        let world = one_sphere_world();
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        let mut rng = StdRng::seed_from_u64(31);

        let radiance = shade(&ray, &world, ShadeMode::DepthLimited { max_depth: 0 }, &mut rng);
        assert_eq!(radiance, background(&ray));
    }

    #[test]
    fn test_miss_is_background_regardless_of_scene() {
        let empty = ObjectList::new();
        let populated = one_sphere_world();
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.3, 0.8, 0.1));
        let mut rng = StdRng::seed_from_u64(32);
        let mode = ShadeMode::DepthLimited { max_depth: 8 };

        let expected = background(&ray);
        assert_eq!(shade(&ray, &empty, mode, &mut rng), expected);
        assert_eq!(shade(&ray, &populated, mode, &mut rng), expected);
    }

    #[test]
    fn test_absorption_is_black() {
        struct Absorber;
        impl crate::Material for Absorber {
            fn scatter(
                &self,
                _ray_in: &Ray,
                _rec: &crate::HitRecord<'_>,
                _rng: &mut dyn rand::RngCore,
            ) -> Option<crate::ScatterResult> {
                None
            }
        }

        let mut world = ObjectList::new();
        world.add(Box::new(Sphere::new(
            Point3::new(0.0, 0.0, -2.0),
            0.5,
            Arc::new(Absorber),
        )));
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rng = StdRng::seed_from_u64(33);

        let radiance = shade(&ray, &world, ShadeMode::DepthLimited { max_depth: 4 }, &mut rng);
        assert_eq!(radiance, Color::ZERO);
    }

    #[test]
    fn test_mirror_bounce_escapes_to_background() {
        // Attenuation pi/pi = 1: the head-on mirror reflection returns
        // along +z and the radiance is exactly the background behind it
        let mut world = ObjectList::new();
        world.add(Box::new(Sphere::new(
            Point3::new(0.0, 0.0, -2.0),
            0.5,
            Arc::new(Metal::new(Color::splat(std::f32::consts::PI), 0.0)),
        )));
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rng = StdRng::seed_from_u64(36);

        let radiance = shade(&ray, &world, ShadeMode::DepthLimited { max_depth: 4 }, &mut rng);
        let expected = background(&Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, 1.0)));
        assert!((radiance - expected).length() < 1e-4);
    }

    #[test]
    fn test_rejection_mode_terminates_and_bounds() {
        let world = one_sphere_world();
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rng = StdRng::seed_from_u64(34);
        let mode = ShadeMode::Rejection { reject_rate: 0.2 };

        for _ in 0..100 {
            let radiance = shade(&ray, &world, mode, &mut rng);
            assert!(radiance.x.is_finite());
            assert!(radiance.min_element() >= 0.0);
        }
    }

    #[test]
    fn test_rejection_miss_is_compensated_background() {
        let world = ObjectList::new();
        let ray = Ray::new(Point3::ZERO, Vec3::Y);
        // reject_rate 0 never rejects and compensates by exactly 1
        let mut rng = StdRng::seed_from_u64(35);
        let radiance = shade(&ray, &world, ShadeMode::Rejection { reject_rate: 0.0 }, &mut rng);
        assert_eq!(radiance, background(&ray));
    }
}
