//! Camera for ray generation, with thin-lens depth of field.

use lume_math::{random_in_unit_disk, Point3, Ray, Vec3};
use rand::RngCore;

/// Camera mapping viewport coordinates to world-space rays.
///
/// Immutable per render. The viewport is described by its lower-left corner
/// and horizontal/vertical extent vectors; the orthonormal basis derived
/// from them orients the lens disk.
#[derive(Debug, Clone)]
pub struct Camera {
    pos: Point3,
    lower_left: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    x_axis: Vec3,
    y_axis: Vec3,
    z_axis: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Default axis-aligned camera: eye at the origin looking down -z onto
    /// a 4x2 viewport one unit away, no lens.
    pub fn new() -> Self {
        Self::from_viewport(
            Point3::ZERO,
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Point3::new(-2.0, -1.0, -1.0),
            0.0,
        )
    }

    /// Camera from an explicit viewport: corner plus extent vectors.
    ///
    /// `aperture` is the lens diameter; 0 disables depth of field.
    pub fn from_viewport(
        pos: Point3,
        horizontal: Vec3,
        vertical: Vec3,
        lower_left: Point3,
        aperture: f32,
    ) -> Self {
        let x_axis = horizontal.normalize();
        let y_axis = vertical.normalize();
        let z_axis = x_axis.cross(y_axis);
        Self {
            pos,
            lower_left,
            horizontal,
            vertical,
            x_axis,
            y_axis,
            z_axis,
            lens_radius: aperture * 0.5,
        }
    }

    /// Camera from a look-from/look-at pair.
    ///
    /// Derives a right-handed orthonormal basis via cross products and
    /// places the viewport on the plane of perfect focus.
    ///
    /// - `vfov`: vertical field of view in degrees
    /// - `aperture`: lens diameter, 0 disables depth of field
    /// - `focus_dist`: distance from the eye to the focus plane
    pub fn look_at(
        pos: Point3,
        look_at: Point3,
        up: Vec3,
        vfov: f32,
        aspect_ratio: f32,
        aperture: f32,
        focus_dist: f32,
    ) -> Self {
        let theta = vfov.to_radians();
        let half_height = (theta * 0.5).tan();
        let half_width = aspect_ratio * half_height;

        // Right-handed coordinates
        let z_axis = (pos - look_at).normalize();
        let x_axis = up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis);

        let lower_left = pos
            - half_width * focus_dist * x_axis
            - half_height * focus_dist * y_axis
            - focus_dist * z_axis;

        Self {
            pos,
            lower_left,
            horizontal: 2.0 * half_width * focus_dist * x_axis,
            vertical: 2.0 * half_height * focus_dist * y_axis,
            x_axis,
            y_axis,
            z_axis,
            lens_radius: aperture * 0.5,
        }
    }

    /// Generate the ray through viewport coordinates (u, v) in [0, 1]^2.
    ///
    /// With a positive lens radius the origin is jittered over the lens
    /// disk in the local x/y basis and the ray aims at the focus-plane
    /// point, which keeps that plane sharp.
    pub fn get_ray(&self, u: f32, v: f32, rng: &mut dyn RngCore) -> Ray {
        let target = self.lower_left + u * self.horizontal + v * self.vertical;
        if self.lens_radius > 0.0 {
            let disk = random_in_unit_disk(rng, self.lens_radius);
            let offset = self.x_axis * disk.x + self.y_axis * disk.y;
            Ray::new(self.pos + offset, target - self.pos - offset)
        } else {
            Ray::new(self.pos, target - self.pos)
        }
    }

    /// Generate the ray for symmetric coordinates (x, y) in [-1, 1]^2.
    pub fn get_ray_xy(&self, x: f32, y: f32, rng: &mut dyn RngCore) -> Ray {
        self.get_ray(x * 0.5 + 0.5, y * 0.5 + 0.5, rng)
    }

    /// The eye position.
    pub fn position(&self) -> Point3 {
        self.pos
    }

    /// The orthonormal (x, y, z) basis.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.x_axis, self.y_axis, self.z_axis)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
