//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use lume_math::{Interval, Point3, Ray};
use std::sync::Arc;

/// A sphere primitive.
///
/// A negative radius requests inward-facing normals, which models hollow
/// shells (a smaller negative-radius sphere inside a dielectric one leaves
/// a glass shell with air inside).
pub struct Sphere {
    center: Point3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere. The material may be shared across many objects.
    pub fn new(center: Point3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let half_b = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        // Quarter discriminant; tangent rays (== 0) count as misses
        let discriminant = half_b * half_b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-sqrtd - half_b) / a;
        if !ray_t.contains(root) {
            root = (sqrtd - half_b) / a;
            if !ray_t.contains(root) {
                return None;
            }
        }

        // Outsideness comes from the origin's squared distance to the
        // center, not from the root sign, so it holds for both roots
        let outside = c > 0.0;
        let p = ray.at(root);

        // Division by the signed radius inverts the normal for hollow
        // (negative radius) spheres
        let normal = if outside {
            (p - self.center) / self.radius
        } else {
            (self.center - p) / self.radius
        };
        let front = outside == (self.radius >= 0.0);

        Some(HitRecord {
            p,
            normal,
            front,
            t: root,
            material: self.material.as_ref(),
        })
    }
}
