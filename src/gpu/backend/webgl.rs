use glam::Mat4;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    HtmlImageElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL, WebGlShader,
    WebGlTexture, WebGlUniformLocation,
};

use super::{ClearBuffers, Gl, ImageRequest, ShaderStage};
use crate::error::GfxError;

impl Gl for GL {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type Texture = WebGlTexture;
    type UniformLocation = WebGlUniformLocation;
    type Image = HtmlImageElement;

    fn create_shader(&self, stage: ShaderStage) -> Option<WebGlShader> {
        let kind = match stage {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        };
        GL::create_shader(self, kind)
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        GL::shader_source(self, shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        GL::compile_shader(self, shader);
    }

    fn shader_compiled(&self, shader: &WebGlShader) -> bool {
        self.get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.get_shader_info_log(shader)
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        GL::delete_shader(self, Some(shader));
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        GL::create_program(self)
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        GL::attach_shader(self, program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        GL::link_program(self, program);
    }

    fn program_linked(&self, program: &WebGlProgram) -> bool {
        self.get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.get_program_info_log(program)
    }

    fn delete_program(&self, program: &WebGlProgram) {
        GL::delete_program(self, Some(program));
    }

    fn use_program(&self, program: &WebGlProgram) {
        GL::use_program(self, Some(program));
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> i32 {
        self.get_attrib_location(program, name)
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.get_uniform_location(program, name)
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        GL::create_buffer(self)
    }

    fn bind_array_buffer(&self, buffer: &WebGlBuffer) {
        self.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    }

    fn array_buffer_data(&self, data: &[f32]) {
        let array = js_sys::Float32Array::from(data);
        self.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, components: i32) {
        self.vertex_attrib_pointer_with_i32(index, components, GL::FLOAT, false, 0, 0);
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        GL::enable_vertex_attrib_array(self, index);
    }

    fn create_texture(&self) -> Option<WebGlTexture> {
        GL::create_texture(self)
    }

    fn active_texture_unit(&self, unit: u32) {
        self.active_texture(GL::TEXTURE0 + unit);
    }

    fn bind_texture_2d(&self, texture: &WebGlTexture) {
        self.bind_texture(GL::TEXTURE_2D, Some(texture));
    }

    fn tex_image_2d_pixels(&self, width: i32, height: i32, pixels: &[u8]) -> Result<(), GfxError> {
        self.tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
            GL::TEXTURE_2D,
            0,
            GL::RGBA as i32,
            width,
            height,
            0,
            GL::RGBA,
            GL::UNSIGNED_BYTE,
            Some(pixels),
        )?;
        Ok(())
    }

    fn tex_image_2d_image(&self, image: &HtmlImageElement) -> Result<(), GfxError> {
        self.tex_image_2d_with_u32_and_u32_and_image(
            GL::TEXTURE_2D,
            0,
            GL::RGBA as i32,
            GL::RGBA,
            GL::UNSIGNED_BYTE,
            image,
        )?;
        Ok(())
    }

    fn generate_mipmap_2d(&self) {
        self.generate_mipmap(GL::TEXTURE_2D);
    }

    fn request_image(&self, src: &str) -> ImageRequest<HtmlImageElement> {
        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(_) => return Box::pin(async { None }),
        };

        // Settles exactly once, on load or on error
        let settled = js_sys::Promise::new(&mut |resolve, reject| {
            image.set_onload(Some(&resolve));
            image.set_onerror(Some(&reject));
        });
        image.set_src(src);

        Box::pin(async move {
            let loaded = JsFuture::from(settled).await.is_ok();
            image.set_onload(None);
            image.set_onerror(None);
            loaded.then_some(image)
        })
    }

    fn uniform_1i(&self, location: &WebGlUniformLocation, value: i32) {
        self.uniform1i(Some(location), value);
    }

    fn uniform_matrix4(&self, location: &WebGlUniformLocation, matrix: &Mat4) {
        self.uniform_matrix4fv_with_f32_array(Some(location), false, &matrix.to_cols_array());
    }

    fn clear_color(&self, [r, g, b, a]: [f32; 4]) {
        GL::clear_color(self, r, g, b, a);
    }

    fn clear(&self, buffers: ClearBuffers) {
        let mask = match buffers {
            ClearBuffers::Color => GL::COLOR_BUFFER_BIT,
            ClearBuffers::ColorAndDepth => GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT,
        };
        GL::clear(self, mask);
    }

    fn draw_triangle_strip(&self, first: i32, count: i32) {
        self.draw_arrays(GL::TRIANGLE_STRIP, first, count);
    }
}
