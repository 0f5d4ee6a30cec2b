//! Renders the classic random-sphere "weekend" scene.
//!
//! Albedos are scaled by pi to cancel the materials' 1/pi normalization.

use lume_render::{
    render, write_ppm, Camera, Color, Dielectric, Encoding, Lambertian, Metal, ObjectList,
    Point3, RenderConfig, ShadeMode, Sphere, Vec3,
};
use lume_math::{gen_f32, gen_range, random_in_box};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::f32::consts::PI;
use std::sync::Arc;

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(2020);

    let start = std::time::Instant::now();
    let world = build_scene(&mut rng);
    println!("Scene built with {} objects in {:?}", world.len(), start.elapsed());

    let camera = Camera::look_at(
        Point3::new(13.0, 2.0, 3.0),
        Point3::ZERO,
        Vec3::Y,
        20.0,
        16.0 / 9.0,
        0.1,
        10.0,
    );

    let config = RenderConfig {
        width: 480,
        height: 270,
        samples_per_pixel: 32,
        jitter: 0.5,
        mode: ShadeMode::DepthLimited { max_depth: 48 },
    };

    println!(
        "Rendering {}x{} @ {} spp...",
        config.width, config.height, config.samples_per_pixel
    );

    let start = std::time::Instant::now();
    let film = render(&camera, &world, &config, &mut rng).expect("valid render config");
    println!("Rendered in {:?}", start.elapsed());

    write_ppm(&film, "weekend.ppm", Encoding::Gamma).expect("failed to write PPM");
    film.save("weekend.png", Encoding::Gamma)
        .expect("failed to write PNG");
    println!("Saved weekend.ppm and weekend.png");
}

fn build_scene(rng: &mut dyn RngCore) -> ObjectList {
    let mut world = ObjectList::new();

    // Ground
    world.add(Box::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(Color::splat(0.5) * PI)),
    )));

    let glass: Arc<Dielectric> = Arc::new(Dielectric::new(Color::ONE * PI, 0.0, 1.5));

    // Grid of small spheres with randomized materials
    for a in -11..11 {
        for b in -11..11 {
            let center = Point3::new(
                a as f32 + 0.9 * gen_f32(rng),
                0.2,
                b as f32 + 0.9 * gen_f32(rng),
            );
            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let choose_mat = gen_f32(rng);
            if choose_mat < 0.8 {
                let albedo = random_in_box(rng, 0.0, 1.0) * random_in_box(rng, 0.0, 1.0) * PI;
                world.add(Box::new(Sphere::new(
                    center,
                    0.2,
                    Arc::new(Lambertian::new(albedo)),
                )));
            } else if choose_mat < 0.95 {
                let albedo = random_in_box(rng, 0.5, 1.0) * PI;
                let fuzz = gen_range(rng, 0.0, 0.5);
                world.add(Box::new(Sphere::new(
                    center,
                    0.2,
                    Arc::new(Metal::new(albedo, fuzz)),
                )));
            } else {
                world.add(Box::new(Sphere::new(center, 0.2, glass.clone())));
            }
        }
    }

    // Three hero spheres
    world.add(Box::new(Sphere::new(
        Point3::new(0.0, 1.0, 0.0),
        1.0,
        glass,
    )));
    world.add(Box::new(Sphere::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1) * PI)),
    )));
    world.add(Box::new(Sphere::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5) * PI, 0.0)),
    )));

    world
}
