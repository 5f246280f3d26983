//! In-memory backend for unit tests.
//!
//! Every call is appended to a shared log so tests can assert on ordering,
//! and texture contents are tracked per handle so a draw can be checked
//! against whatever texture was bound when it was issued.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use glam::Mat4;

use super::{ClearBuffers, Gl, ImageRequest, ShaderStage};
use crate::error::GfxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub enum Texels {
    Pixels { width: i32, height: i32, data: Vec<u8> },
    Image(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage, Handle),
    CompileShader(Handle),
    DeleteShader(Handle),
    CreateProgram(Handle),
    AttachShader(Handle, Handle),
    LinkProgram(Handle),
    DeleteProgram(Handle),
    UseProgram(Handle),
    BufferData(Handle, Vec<f32>),
    VertexAttribPointer { index: u32, components: i32, buffer: Handle },
    EnableVertexAttribArray(u32),
    ActiveTexture(u32),
    BindTexture(Handle),
    TexImage(Handle, Texels),
    GenerateMipmap(Handle),
    RequestImage(String),
    Uniform1i(Handle, i32),
    UniformMatrix4(Handle, Mat4),
    ClearColor([f32; 4]),
    Clear(ClearBuffers),
    Draw { first: i32, count: i32, program: Option<Handle>, texture: Option<Texels> },
    /// Pushed by test doubles that are not part of the backend.
    Marker(&'static str),
}

#[derive(Default)]
struct State {
    next_handle: u32,
    calls: Vec<Call>,
    failing_stage: Option<ShaderStage>,
    failing_link: bool,
    shaders: HashMap<Handle, (ShaderStage, String)>,
    linked: HashMap<Handle, bool>,
    uniforms: HashMap<(Handle, String), Handle>,
    images: HashMap<String, String>,
    textures: HashMap<Handle, Texels>,
    bound_buffer: Option<Handle>,
    bound_texture: Option<Handle>,
    current_program: Option<Handle>,
}

impl State {
    fn handle(&mut self) -> Handle {
        self.next_handle += 1;
        Handle(self.next_handle)
    }
}

#[derive(Clone, Default)]
pub struct RecordingGl {
    state: Rc<RefCell<State>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every compile of `stage` fail with a canned info log.
    pub fn failing_compile(self, stage: ShaderStage) -> Self {
        self.state.borrow_mut().failing_stage = Some(stage);
        self
    }

    pub fn failing_link(self) -> Self {
        self.state.borrow_mut().failing_link = true;
        self
    }

    /// Registers an image that `request_image(src)` will resolve to.
    pub fn with_image(self, src: &str, name: &str) -> Self {
        self.state
            .borrow_mut()
            .images
            .insert(src.to_string(), name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn mark(&self, label: &'static str) {
        self.record(Call::Marker(label));
    }

    pub fn texels(&self, texture: Handle) -> Option<Texels> {
        self.state.borrow().textures.get(&texture).cloned()
    }

    pub fn draws(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Draw { .. }))
            .collect()
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn upload(&self, texels: Texels) -> Result<(), GfxError> {
        let mut state = self.state.borrow_mut();
        let texture = state
            .bound_texture
            .ok_or(GfxError::Js("no texture bound".to_string()))?;
        state.textures.insert(texture, texels.clone());
        state.calls.push(Call::TexImage(texture, texels));
        Ok(())
    }
}

impl Gl for RecordingGl {
    type Shader = Handle;
    type Program = Handle;
    type Buffer = Handle;
    type Texture = Handle;
    type UniformLocation = Handle;
    type Image = String;

    fn create_shader(&self, stage: ShaderStage) -> Option<Handle> {
        let mut state = self.state.borrow_mut();
        let shader = state.handle();
        state.shaders.insert(shader, (stage, String::new()));
        state.calls.push(Call::CreateShader(stage, shader));
        Some(shader)
    }

    fn shader_source(&self, shader: &Handle, source: &str) {
        if let Some(entry) = self.state.borrow_mut().shaders.get_mut(shader) {
            entry.1 = source.to_string();
        }
    }

    fn compile_shader(&self, shader: &Handle) {
        self.record(Call::CompileShader(*shader));
    }

    fn shader_compiled(&self, shader: &Handle) -> bool {
        let state = self.state.borrow();
        match state.shaders.get(shader) {
            Some((stage, source)) => Some(*stage) != state.failing_stage && !source.is_empty(),
            None => false,
        }
    }

    fn shader_info_log(&self, shader: &Handle) -> Option<String> {
        let state = self.state.borrow();
        let (stage, _) = state.shaders.get(shader)?;
        Some(format!("ERROR: 0:1: {stage} stage rejected"))
    }

    fn delete_shader(&self, shader: &Handle) {
        self.state.borrow_mut().shaders.remove(shader);
        self.record(Call::DeleteShader(*shader));
    }

    fn create_program(&self) -> Option<Handle> {
        let mut state = self.state.borrow_mut();
        let program = state.handle();
        state.calls.push(Call::CreateProgram(program));
        Some(program)
    }

    fn attach_shader(&self, program: &Handle, shader: &Handle) {
        self.record(Call::AttachShader(*program, *shader));
    }

    fn link_program(&self, program: &Handle) {
        let mut state = self.state.borrow_mut();
        let linked = !state.failing_link;
        state.linked.insert(*program, linked);
        state.calls.push(Call::LinkProgram(*program));
    }

    fn program_linked(&self, program: &Handle) -> bool {
        self.state
            .borrow()
            .linked
            .get(program)
            .copied()
            .unwrap_or(false)
    }

    fn program_info_log(&self, _program: &Handle) -> Option<String> {
        Some("ERROR: varyings do not match".to_string())
    }

    fn delete_program(&self, program: &Handle) {
        self.state.borrow_mut().linked.remove(program);
        self.record(Call::DeleteProgram(*program));
    }

    fn use_program(&self, program: &Handle) {
        self.state.borrow_mut().current_program = Some(*program);
        self.record(Call::UseProgram(*program));
    }

    fn attrib_location(&self, program: &Handle, name: &str) -> i32 {
        if !self.program_linked(program) {
            return -1;
        }
        match name {
            "aVertexPosition" => 0,
            "aTextureCoord" => 1,
            _ => -1,
        }
    }

    fn uniform_location(&self, program: &Handle, name: &str) -> Option<Handle> {
        if !self.program_linked(program) {
            return None;
        }
        let mut state = self.state.borrow_mut();
        let key = (*program, name.to_string());
        if let Some(location) = state.uniforms.get(&key) {
            return Some(*location);
        }
        let location = state.handle();
        state.uniforms.insert(key, location);
        Some(location)
    }

    fn create_buffer(&self) -> Option<Handle> {
        Some(self.state.borrow_mut().handle())
    }

    fn bind_array_buffer(&self, buffer: &Handle) {
        self.state.borrow_mut().bound_buffer = Some(*buffer);
    }

    fn array_buffer_data(&self, data: &[f32]) {
        let mut state = self.state.borrow_mut();
        if let Some(buffer) = state.bound_buffer {
            state.calls.push(Call::BufferData(buffer, data.to_vec()));
        }
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, components: i32) {
        let mut state = self.state.borrow_mut();
        if let Some(buffer) = state.bound_buffer {
            state.calls.push(Call::VertexAttribPointer {
                index,
                components,
                buffer,
            });
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableVertexAttribArray(index));
    }

    fn create_texture(&self) -> Option<Handle> {
        Some(self.state.borrow_mut().handle())
    }

    fn active_texture_unit(&self, unit: u32) {
        self.record(Call::ActiveTexture(unit));
    }

    fn bind_texture_2d(&self, texture: &Handle) {
        self.state.borrow_mut().bound_texture = Some(*texture);
        self.record(Call::BindTexture(*texture));
    }

    fn tex_image_2d_pixels(&self, width: i32, height: i32, pixels: &[u8]) -> Result<(), GfxError> {
        self.upload(Texels::Pixels {
            width,
            height,
            data: pixels.to_vec(),
        })
    }

    fn tex_image_2d_image(&self, image: &String) -> Result<(), GfxError> {
        self.upload(Texels::Image(image.clone()))
    }

    fn generate_mipmap_2d(&self) {
        let mut state = self.state.borrow_mut();
        if let Some(texture) = state.bound_texture {
            state.calls.push(Call::GenerateMipmap(texture));
        }
    }

    fn request_image(&self, src: &str) -> ImageRequest<String> {
        self.record(Call::RequestImage(src.to_string()));
        let image = self.state.borrow().images.get(src).cloned();
        Box::pin(async move { image })
    }

    fn uniform_1i(&self, location: &Handle, value: i32) {
        self.record(Call::Uniform1i(*location, value));
    }

    fn uniform_matrix4(&self, location: &Handle, matrix: &Mat4) {
        self.record(Call::UniformMatrix4(*location, *matrix));
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        self.record(Call::ClearColor(rgba));
    }

    fn clear(&self, buffers: ClearBuffers) {
        self.record(Call::Clear(buffers));
    }

    fn draw_triangle_strip(&self, first: i32, count: i32) {
        let mut state = self.state.borrow_mut();
        let texture = state
            .bound_texture
            .and_then(|texture| state.textures.get(&texture).cloned());
        let program = state.current_program;
        state.calls.push(Call::Draw {
            first,
            count,
            program,
            texture,
        });
    }
}
