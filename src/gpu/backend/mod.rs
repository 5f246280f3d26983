// Rendering Backend
// The slice of the WebGL API the table renderer needs, expressed as a trait
// Implementations:
// - WebGlRenderingContext (browser, see webgl.rs)
// - RecordingGl (unit tests, see recording.rs)

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use glam::Mat4;

use crate::error::GfxError;

mod webgl;

#[cfg(test)]
pub mod recording;

/// Image fetch that resolves at most once; `None` means the fetch failed.
pub type ImageRequest<I> = Pin<Box<dyn Future<Output = Option<I>>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearBuffers {
    Color,
    ColorAndDepth,
}

pub trait Gl: Clone + 'static {
    type Shader: Clone + 'static;
    type Program: Clone + 'static;
    type Buffer: Clone + 'static;
    type Texture: Clone + 'static;
    type UniformLocation: Clone + 'static;
    type Image: 'static;

    // Shaders and programs
    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compiled(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;
    fn delete_shader(&self, shader: &Self::Shader);

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn program_linked(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    fn delete_program(&self, program: &Self::Program);
    fn use_program(&self, program: &Self::Program);

    /// Returns -1 when the attribute is not active in the program.
    fn attrib_location(&self, program: &Self::Program, name: &str) -> i32;
    fn uniform_location(&self, program: &Self::Program, name: &str)
    -> Option<Self::UniformLocation>;

    // Vertex data
    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn bind_array_buffer(&self, buffer: &Self::Buffer);
    /// Uploads `data` into the currently bound array buffer with a static-draw hint.
    fn array_buffer_data(&self, data: &[f32]);
    /// Points `index` at tightly packed f32 components of the bound array buffer.
    fn vertex_attrib_pointer_f32(&self, index: u32, components: i32);
    fn enable_vertex_attrib_array(&self, index: u32);

    // Textures
    fn create_texture(&self) -> Option<Self::Texture>;
    fn active_texture_unit(&self, unit: u32);
    fn bind_texture_2d(&self, texture: &Self::Texture);
    /// Level-0 RGBA/unsigned-byte upload of raw pixels into the bound texture.
    fn tex_image_2d_pixels(&self, width: i32, height: i32, pixels: &[u8]) -> Result<(), GfxError>;
    /// Level-0 RGBA/unsigned-byte upload of a decoded image into the bound texture.
    fn tex_image_2d_image(&self, image: &Self::Image) -> Result<(), GfxError>;
    fn generate_mipmap_2d(&self);
    fn request_image(&self, src: &str) -> ImageRequest<Self::Image>;

    // Uniforms
    fn uniform_1i(&self, location: &Self::UniformLocation, value: i32);
    fn uniform_matrix4(&self, location: &Self::UniformLocation, matrix: &Mat4);

    // Frame
    fn clear_color(&self, rgba: [f32; 4]);
    fn clear(&self, buffers: ClearBuffers);
    fn draw_triangle_strip(&self, first: i32, count: i32);
}
