// Quad Geometry
// Static vertex data for the single textured card quad
// Vertex order is bottom-left, bottom-right, top-left, top-right so the
// four vertices draw directly as a triangle strip

use crate::error::GfxError;
use crate::gpu::backend::Gl;

pub const QUAD_VERTEX_COUNT: i32 = 4;
pub const COMPONENTS_PER_VERTEX: i32 = 2;

pub const QUAD_POSITIONS: [f32; 8] = [
    -1.0, -1.0, //
    1.0, -1.0, //
    -1.0, 1.0, //
    1.0, 1.0,
];

pub const QUAD_TEXTURE_COORDS: [f32; 8] = [
    0.0, 0.0, //
    1.0, 0.0, //
    0.0, 1.0, //
    1.0, 1.0,
];

pub struct BufferSet<G: Gl> {
    pub position: G::Buffer,
    pub texture_coord: G::Buffer,
}

fn upload<G: Gl>(gl: &G, data: &[f32]) -> Result<G::Buffer, GfxError> {
    let buffer = gl
        .create_buffer()
        .ok_or(GfxError::ResourceCreation("vertex buffer"))?;
    gl.bind_array_buffer(&buffer);
    gl.array_buffer_data(data);
    Ok(buffer)
}

/// Uploads the quad positions and texture coordinates into fresh buffers.
pub fn build_buffers<G: Gl>(gl: &G) -> Result<BufferSet<G>, GfxError> {
    Ok(BufferSet {
        position: upload(gl, &QUAD_POSITIONS)?,
        texture_coord: upload(gl, &QUAD_TEXTURE_COORDS)?,
    })
}
