// Render Session
// Everything one game needs to draw a frame, built once at game start
// Responsibilities:
// - Build the program, quad buffers and card texture
// - Paint the initial table color
// - Draw one frame: clear, bind, upload uniforms, draw the quad

use crate::config::GameConfig;
use crate::error::GfxError;
use crate::gpu::backend::{ClearBuffers, Gl};
use crate::gpu::geometry::{BufferSet, COMPONENTS_PER_VERTEX, QUAD_VERTEX_COUNT, build_buffers};
use crate::gpu::pipeline::{ProgramInfo, build_pipeline};
use crate::gpu::texture::{PendingTexture, TextureSet, build_texture};
use crate::gpu::utils::{clear_screen, model_view_matrix, projection_matrix};

/// Texture unit the card sampler reads from.
const CARD_TEXTURE_UNIT: u32 = 0;

pub struct RenderSession<G: Gl> {
    gl: G,
    program: ProgramInfo<G>,
    buffers: BufferSet<G>,
    textures: TextureSet<G>,
}

impl<G: Gl> RenderSession<G> {
    /// Builds the pipeline and resources, then clears to the table color.
    ///
    /// A failed shader build still produces a session (it only clears each
    /// frame); failing to allocate buffers or the texture does not.
    pub fn init(gl: &G, config: &GameConfig) -> Result<(Self, PendingTexture<G>), GfxError> {
        let program = build_pipeline(gl);
        let buffers = build_buffers(gl)?;
        let (textures, pending) = build_texture(gl, &config.texture_path)?;
        clear_screen(gl, config.clear_color);

        let session = Self {
            gl: gl.clone(),
            program,
            buffers,
            textures,
        };
        Ok((session, pending))
    }

    pub fn program(&self) -> &ProgramInfo<G> {
        &self.program
    }

    /// Draws the card quad for a surface of the given pixel size.
    pub fn draw_frame(&self, (width, height): (u32, u32)) {
        let gl = &self.gl;
        gl.clear(ClearBuffers::ColorAndDepth);

        let Some(program) = &self.program.program else {
            return;
        };
        gl.use_program(program);

        let attribs = &self.program.attrib_locations;
        if let Some(index) = attribs.vertex_position {
            gl.bind_array_buffer(&self.buffers.position);
            gl.vertex_attrib_pointer_f32(index, COMPONENTS_PER_VERTEX);
            gl.enable_vertex_attrib_array(index);
        }
        if let Some(index) = attribs.texture_coord {
            gl.bind_array_buffer(&self.buffers.texture_coord);
            gl.vertex_attrib_pointer_f32(index, COMPONENTS_PER_VERTEX);
            gl.enable_vertex_attrib_array(index);
        }

        gl.active_texture_unit(CARD_TEXTURE_UNIT);
        gl.bind_texture_2d(&self.textures.texture);

        let uniforms = &self.program.uniform_locations;
        if let Some(sampler) = &uniforms.sampler {
            gl.uniform_1i(sampler, CARD_TEXTURE_UNIT as i32);
        }
        if let Some(projection) = &uniforms.projection_matrix {
            gl.uniform_matrix4(projection, &projection_matrix(width, height));
        }
        if let Some(model_view) = &uniforms.model_view_matrix {
            gl.uniform_matrix4(model_view, &model_view_matrix());
        }

        gl.draw_triangle_strip(0, QUAD_VERTEX_COUNT);
    }
}
