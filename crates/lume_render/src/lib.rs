//! lume - CPU path tracing
//!
//! A Monte Carlo path tracer over an unindexed object list: spheres with
//! lambertian, metal and dielectric responses, a thin-lens camera, and a
//! recursive radiance integrator with multi-sample averaging.

mod camera;
mod color;
mod hittable;
mod integrator;
mod material;
mod ppm;
mod renderer;
mod sphere;

pub use camera::Camera;
pub use color::{encode, Encoding};
pub use hittable::{HitRecord, Hittable, ObjectList};
pub use integrator::{background, shade, ShadeMode, T_MIN_EPSILON};
pub use material::{Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use ppm::write_ppm;
pub use renderer::{render, Film, RenderConfig, RenderError};
pub use sphere::Sphere;

/// Re-export math types from lume_math
pub use lume_math::{Color, Interval, Point3, Ray, Vec3};
