//! Reference scene example.
//!
//! Renders the Cook-Torrance showcase (a boxed-in view with two rows of
//! spheres sweeping roughness across metal and plastic, plus a small quad
//! mesh) and saves the frame as a PNG.

use anyhow::{Context, Result};
use ember_core::{CookTorrance, CullMode, Lambert, Scene, TriangleMesh};
use ember_math::{Mat4, Vec3};
use ember_renderer::{render, Camera, Color, Framebuffer, RenderConfig};

fn main() -> Result<()> {
    env_logger::init();

    let scene = build_scene();
    let camera = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0).look_at(Vec3::new(0.0, 2.0, 0.0));
    let config = RenderConfig::default();

    let mut frame = Framebuffer::new(1280, 720);

    println!(
        "Rendering {}x{} ({:?})...",
        frame.width(),
        frame.height(),
        config.dispatch
    );
    let started = std::time::Instant::now();
    render(&scene, &camera, &config, &mut frame);
    println!("Rendered in {:?}", started.elapsed());

    let filename = "output.png";
    save_png(&frame, filename).context("failed to save image")?;
    println!("Saved to {filename}");

    Ok(())
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    let silver = Color::new(0.972, 0.960, 0.915);
    let gray = Color::splat(0.75);

    let rough_metal = scene.add_material(Box::new(CookTorrance::new(silver, 1.0, 1.0)));
    let medium_metal = scene.add_material(Box::new(CookTorrance::new(silver, 1.0, 0.6)));
    let smooth_metal = scene.add_material(Box::new(CookTorrance::new(silver, 1.0, 0.1)));
    let rough_plastic = scene.add_material(Box::new(CookTorrance::new(gray, 0.0, 1.0)));
    let medium_plastic = scene.add_material(Box::new(CookTorrance::new(gray, 0.0, 0.6)));
    let smooth_plastic = scene.add_material(Box::new(CookTorrance::new(gray, 0.0, 0.1)));

    let gray_blue = scene.add_material(Box::new(Lambert::new(1.0, Color::new(0.49, 0.57, 0.57))));

    // Box the view in.
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z, gray_blue); // back
    scene.add_plane(Vec3::ZERO, Vec3::Y, gray_blue); // bottom
    scene.add_plane(Vec3::new(0.0, 10.0, 10.0), -Vec3::Y, gray_blue); // top
    scene.add_plane(Vec3::new(5.0, 0.0, 10.0), -Vec3::X, gray_blue); // right
    scene.add_plane(Vec3::new(-5.0, 0.0, 10.0), Vec3::X, gray_blue); // left

    // Bottom row: metals, rough to smooth. Top row: plastics.
    scene.add_sphere(Vec3::new(-1.75, 1.0, 0.0), 0.75, rough_metal);
    scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 0.75, medium_metal);
    scene.add_sphere(Vec3::new(1.75, 1.0, 0.0), 0.75, smooth_metal);
    scene.add_sphere(Vec3::new(-1.75, 3.0, 0.0), 0.75, rough_plastic);
    scene.add_sphere(Vec3::new(0.0, 3.0, 0.0), 0.75, medium_plastic);
    scene.add_sphere(Vec3::new(1.75, 3.0, 0.0), 0.75, smooth_plastic);

    // A small quad hovering behind the spheres, wound so its normal faces
    // the camera (back-face culling hides the reverse side).
    let mut quad = TriangleMesh::new(
        vec![
            Vec3::new(-0.75, -0.75, 0.0),
            Vec3::new(0.75, -0.75, 0.0),
            Vec3::new(0.75, 0.75, 0.0),
            Vec3::new(-0.75, 0.75, 0.0),
        ],
        vec![0, 2, 1, 0, 3, 2],
        CullMode::BackFace,
        rough_plastic,
    );
    quad.set_transform(Mat4::from_translation(Vec3::new(0.0, 4.5, 3.0)));
    scene.add_triangle_mesh(quad);

    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 50.0, Color::new(1.0, 0.61, 0.45));
    scene.add_point_light(Vec3::new(-2.0, 5.0, -5.0), 70.0, Color::new(1.0, 0.8, 0.45));
    scene.add_point_light(Vec3::new(2.5, 2.5, -5.0), 50.0, Color::new(0.34, 0.47, 0.6));

    scene
}

fn save_png(frame: &Framebuffer, filename: &str) -> Result<()> {
    let image = image::RgbImage::from_fn(frame.width(), frame.height(), |x, y| {
        let pixel = frame.get(x, y);
        image::Rgb([
            ((pixel >> 16) & 0xFF) as u8,
            ((pixel >> 8) & 0xFF) as u8,
            (pixel & 0xFF) as u8,
        ])
    });
    image.save(filename)?;
    Ok(())
}
