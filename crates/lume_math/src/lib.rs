// Re-export glam for convenience
pub use glam::*;

// lume math types
mod interval;
mod ray;
mod sample;
mod vec;

pub use interval::Interval;
pub use ray::Ray;
pub use sample::{
    gen_f32, gen_range, random_in_box, random_in_hemisphere, random_in_unit_disk,
    random_on_pillar, random_on_sphere,
};
pub use vec::{lerp, reflect, refract, Color, Point3};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }
}
