// WebGL Utilities
// Helper functions for common per-frame operations
// - Clearing the surface
// - Projection and model-view matrices

use glam::Mat4;

use crate::gpu::backend::{ClearBuffers, Gl};

pub fn clear_screen<G: Gl>(gl: &G, color: [f32; 4]) {
    gl.clear_color(color);
    gl.clear(ClearBuffers::Color);
}

/// Orthographic-style projection for a surface of `width` x `height` pixels.
///
/// Maps x by `2 / width` and y by `-2 / height`, flips z, and translates by
/// (-1, 1). Zero-sized surfaces are treated as one pixel.
pub fn projection_matrix(width: u32, height: u32) -> Mat4 {
    let width = width.max(1) as f32;
    let height = height.max(1) as f32;

    #[rustfmt::skip]
    let columns = [
        2.0 / width, 0.0,           0.0,  0.0,
        0.0,         -2.0 / height, 0.0,  0.0,
        0.0,         0.0,           -1.0, 0.0,
        -1.0,        1.0,           0.0,  1.0,
    ];
    Mat4::from_cols_array(&columns)
}

pub fn model_view_matrix() -> Mat4 {
    Mat4::IDENTITY
}
