//! Per-pixel render orchestration and work dispatch.
//!
//! Each pixel is a pure function of the scene/camera snapshot and its own
//! index: build the camera ray, query the scene for the closest hit, and
//! accumulate per-light shading with optional shadow attenuation. Because
//! no pixel depends on another, the loop can run sequentially, under rayon,
//! or hand-chunked across scoped threads with identical results.

use crate::camera::Camera;
use crate::chunk::partition;
use crate::framebuffer::{pack_rgb, Framebuffer};
use ember_core::{Color, HitRecord, Scene};
use ember_math::{Mat3, Ray, Vec3};
use rayon::prelude::*;

/// Which component of the lighting equation is written out. Everything but
/// `Combined` is a debug view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightingMode {
    /// Lambert cosine law only.
    ObservedArea,
    /// Incident radiance only.
    Radiance,
    /// Material BRDF only.
    Brdf,
    /// ObservedArea * Radiance * BRDF.
    #[default]
    Combined,
}

/// How the per-pixel work is distributed across threads.
///
/// A configuration choice, not a behavior choice: all three produce the
/// same image for a fixed scene and camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// Partition the pixel range into one contiguous chunk per hardware
    /// thread and join scoped threads.
    Chunked,
    /// Delegate splitting and load balancing to rayon.
    #[default]
    ParallelFor,
    /// Plain loop; the baseline for deterministic debugging.
    Sequential,
}

/// Render settings, passed explicitly into [`render`] so repeated or
/// concurrent renders stay deterministic.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub lighting_mode: LightingMode,
    pub shadows_enabled: bool,
    pub dispatch: DispatchMode,
    /// Color written where a ray escapes the scene.
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            lighting_mode: LightingMode::default(),
            shadows_enabled: true,
            dispatch: DispatchMode::default(),
            background: Color::ZERO,
        }
    }
}

/// Offset along the surface normal for shadow-ray origins, keeping them
/// from re-hitting the surface they start on.
const SHADOW_BIAS: f32 = 1e-2;

/// Shadowed lights keep this fraction of their contribution.
const SHADOW_ATTENUATION: f32 = 0.5;

/// Everything a worker needs to shade any pixel of the frame. Read-only
/// for the duration of the render.
struct RenderContext<'a> {
    scene: &'a Scene,
    config: &'a RenderConfig,
    camera_origin: Vec3,
    camera_to_world: Mat3,
    fov_scale: f32,
    aspect: f32,
    width: u32,
    height: u32,
}

/// Render one frame of `scene` as seen from `camera` into `frame`.
///
/// The scene and camera are treated as immutable snapshots; any mutation
/// (camera movement, scene edits) must happen strictly between frames.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig, frame: &mut Framebuffer) {
    let ctx = RenderContext {
        scene,
        config,
        camera_origin: camera.origin,
        camera_to_world: camera.camera_to_world(),
        fov_scale: camera.fov_scale(),
        aspect: frame.width() as f32 / frame.height() as f32,
        width: frame.width(),
        height: frame.height(),
    };

    let started = std::time::Instant::now();
    let pixels = frame.pixels_mut();

    match config.dispatch {
        DispatchMode::Sequential => {
            for (index, pixel) in pixels.iter_mut().enumerate() {
                *pixel = render_pixel(&ctx, index);
            }
        }
        DispatchMode::ParallelFor => {
            pixels
                .par_iter_mut()
                .enumerate()
                .for_each(|(index, pixel)| *pixel = render_pixel(&ctx, index));
        }
        DispatchMode::Chunked => render_chunked(&ctx, pixels),
    }

    log::debug!(
        "rendered {}x{} frame ({:?}) in {:?}",
        ctx.width,
        ctx.height,
        config.dispatch,
        started.elapsed()
    );
}

/// Manual chunking: one scoped thread per contiguous pixel range, joined
/// when the scope ends.
fn render_chunked(ctx: &RenderContext, pixels: &mut [u32]) {
    let workers = num_cpus::get().max(1);
    let ranges = partition(pixels.len(), workers);

    std::thread::scope(|scope| {
        let mut rest = pixels;
        for range in ranges {
            let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
            rest = tail;
            if chunk.is_empty() {
                continue;
            }
            let start = range.start;
            scope.spawn(move || {
                for (offset, pixel) in chunk.iter_mut().enumerate() {
                    *pixel = render_pixel(ctx, start + offset);
                }
            });
        }
    });
}

/// Shade one pixel: camera ray, closest hit, per-light accumulation.
fn render_pixel(ctx: &RenderContext, index: usize) -> u32 {
    let px = (index as u32 % ctx.width) as f32;
    let py = (index as u32 / ctx.width) as f32;

    // Pixel center in camera space, scaled by fov and aspect ratio.
    let cx = (2.0 * (px + 0.5) / ctx.width as f32 - 1.0) * ctx.aspect * ctx.fov_scale;
    let cy = (1.0 - 2.0 * (py + 0.5) / ctx.height as f32) * ctx.fov_scale;

    let direction = ctx.camera_to_world * Vec3::new(cx, cy, 1.0).normalize();
    let ray = Ray::new(ctx.camera_origin, direction);

    let color = match ctx.scene.closest_hit(&ray) {
        Some(hit) => shade_hit(ctx, &ray, &hit),
        None => ctx.config.background,
    };

    pack_rgb(color)
}

fn shade_hit(ctx: &RenderContext, ray: &Ray, hit: &HitRecord) -> Color {
    let view_dir = -ray.direction;
    let material = ctx.scene.material(hit.material_index);

    let mut color = Color::ZERO;
    for light in ctx.scene.lights() {
        let light_dir = light.direction_to(hit.point).normalize_or_zero();

        // Observed-area term: surfaces facing away from the light receive
        // nothing.
        let cosine = hit.normal.dot(light_dir);
        if cosine <= 0.0 {
            continue;
        }

        let mut contribution = match ctx.config.lighting_mode {
            LightingMode::ObservedArea => Color::splat(cosine),
            LightingMode::Radiance => light.radiance(hit.point),
            LightingMode::Brdf => material.shade(hit, light_dir, view_dir),
            LightingMode::Combined => {
                light.radiance(hit.point) * material.shade(hit, light_dir, view_dir) * cosine
            }
        };

        if ctx.config.shadows_enabled {
            let shadow_origin = hit.point + hit.normal * SHADOW_BIAS;
            let shadow_ray = Ray::with_bounds(
                shadow_origin,
                light_dir,
                Ray::DEFAULT_MIN,
                light.distance(shadow_origin),
            );
            if ctx.scene.does_hit(&shadow_ray) {
                contribution *= SHADOW_ATTENUATION;
            }
        }

        color += contribution;
    }

    color
}
