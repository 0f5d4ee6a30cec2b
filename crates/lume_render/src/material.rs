//! Material trait and the surface scattering models.

use crate::hittable::HitRecord;
use lume_math::{
    gen_f32, random_in_hemisphere, random_on_sphere, reflect, refract, Color, Ray,
};
use rand::RngCore;
use std::f32::consts::PI;

/// Result of a successful scatter: per-channel attenuation plus the
/// outgoing ray.
pub struct ScatterResult {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns the attenuation and scattered ray, or None if the ray is
    /// absorbed.
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult>;
}

/// Lambertian (diffuse) material.
///
/// Scatters into the normal's hemisphere via a mirrored sphere sample. The
/// sample is deliberately not cosine weighted even though the albedo/pi
/// attenuation suggests it; swapping in a cosine-weighted sampler shifts
/// the overall image brightness.
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        _ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let scatter_dir = random_in_hemisphere(rng, 1.0, rec.normal);
        Some(ScatterResult {
            attenuation: self.albedo / PI,
            scattered: Ray::new(rec.p, scatter_dir),
        })
    }
}

/// Metal (specular) material.
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: reflectance per channel
    /// - `fuzz`: roughness, clamped to [0, 1]; 0.0 = perfect mirror
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let mut scatter_dir = reflect(ray_in.direction, rec.normal);
        if self.fuzz > 0.0 {
            scatter_dir += self.fuzz * random_on_sphere(rng, 1.0);
        }

        // Absorb rays the fuzz pushed below the surface
        if scatter_dir.dot(rec.normal) < 0.0 {
            return None;
        }
        Some(ScatterResult {
            attenuation: self.albedo / PI,
            scattered: Ray::new(rec.p, scatter_dir),
        })
    }
}

/// Schlick's approximation of the Fresnel reflectance.
fn schlick(cos_theta: f32, eta_ratio: f32) -> f32 {
    let r0 = ((1.0 - eta_ratio) / (1.0 + eta_ratio)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cos_theta).powi(5)
}

/// Dielectric (glass) material with tint and optional reflection fuzz.
pub struct Dielectric {
    tint: Color,
    fuzz: f32,
    ref_idx: f32,
    /// Cosine below which refraction is geometrically impossible
    min_cos_theta: f32,
    /// Total internal reflection happens at back faces when the index is
    /// above 1, at front faces when it is below
    tir_at_back: bool,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `tint`: per-channel filter applied at each interaction
    /// - `fuzz`: roughness applied to reflected rays, 0.0 = polished
    /// - `ref_idx`: index of refraction (1.0 = air, 1.5 = glass)
    pub fn new(tint: Color, fuzz: f32, ref_idx: f32) -> Self {
        let (tir_at_back, eta_relative) = if ref_idx < 1.0 {
            (false, ref_idx)
        } else {
            (true, 1.0 / ref_idx)
        };
        Self {
            tint,
            fuzz,
            ref_idx,
            min_cos_theta: (1.0 - eta_relative * eta_relative).sqrt(),
            tir_at_back,
        }
    }
}

impl Material for Dielectric {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let attenuation = self.tint / PI;
        let eta_ratio = if rec.front {
            1.0 / self.ref_idx
        } else {
            self.ref_idx
        };
        let cos_theta = ray_in.direction.normalize().dot(-rec.normal);
        let reflect_prob = schlick(cos_theta, eta_ratio);

        let total_internal = (self.tir_at_back ^ rec.front) && cos_theta <= self.min_cos_theta;
        let scatter_dir = if total_internal || gen_f32(rng) < reflect_prob {
            let mut dir = reflect(ray_in.direction, rec.normal);
            if self.fuzz > 0.0 {
                dir += self.fuzz * random_on_sphere(rng, 1.0);
            }
            dir
        } else {
            refract(ray_in.direction, rec.normal, eta_ratio)
        };

        Some(ScatterResult {
            attenuation,
            scattered: Ray::new(rec.p, scatter_dir),
        })
    }
}
