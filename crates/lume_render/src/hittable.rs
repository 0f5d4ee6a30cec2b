//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use lume_math::{Interval, Point3, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Clone)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Point3,
    /// Unit surface normal at the intersection, oriented per the
    /// signed-radius front-face convention
    pub normal: Vec3,
    /// Whether the ray approached from the surface's defined outward side
    pub front: bool,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Material at the intersection point
    pub material: &'a dyn Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object within the given interval.
    ///
    /// Returns the nearest intersection inside `ray_t`, or None.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// An ordered collection of hittable objects.
///
/// Satisfies the hittable contract itself by returning the globally nearest
/// hit in a single linear scan, shrinking the upper bound to the current
/// best t after each accepted hit.
pub struct ObjectList {
    objects: Vec<Box<dyn Hittable>>,
}

impl ObjectList {
    /// Create a new empty object list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for ObjectList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for ObjectList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest_so_far = ray_t.max;
        let mut best = None;

        for object in &self.objects {
            let interval = Interval::new(ray_t.min, closest_so_far);
            if let Some(rec) = object.hit(ray, interval) {
                closest_so_far = rec.t;
                best = Some(rec);
            }
        }

        best
    }
}
