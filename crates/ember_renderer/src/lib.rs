//! Ember CPU renderer.
//!
//! Direct-lighting raytracer: one primary ray per pixel, per-light
//! Cook-Torrance/Lambert shading with optional hard shadows, and three
//! interchangeable work-dispatch strategies (manual chunking, rayon
//! parallel-for, sequential).

mod camera;
mod chunk;
mod framebuffer;
mod renderer;

pub use camera::Camera;
pub use chunk::partition;
pub use framebuffer::{max_to_one, pack_rgb, Framebuffer};
pub use renderer::{render, DispatchMode, LightingMode, RenderConfig};

/// Re-export the core scene types alongside the renderer.
pub use ember_core::{Color, Scene};
pub use ember_math::Vec3;
