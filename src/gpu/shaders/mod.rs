// Shader Management
// Handles GLSL compilation and program linking
// Responsibilities:
// - Hold the textured-quad vertex/fragment sources
// - Compile a stage from source, releasing it on failure
// - Link two compiled stages into a program, releasing it on failure
// - Report the backend's info log through the logger

use crate::error::GfxError;
use crate::gpu::backend::{Gl, ShaderStage};

pub const VERTEX_SHADER_SOURCE: &str = r#"
attribute vec4 aVertexPosition;
attribute vec2 aTextureCoord;
uniform mat4 uModelViewMatrix;
uniform mat4 uProjectionMatrix;
varying highp vec2 vTextureCoord;
void main(void) {
    gl_Position = uProjectionMatrix * uModelViewMatrix * aVertexPosition;
    vTextureCoord = aTextureCoord;
}
"#;

pub const FRAGMENT_SHADER_SOURCE: &str = r#"
precision mediump float;
varying highp vec2 vTextureCoord;
uniform sampler2D uSampler;
void main(void) {
    gl_FragColor = texture2D(uSampler, vTextureCoord);
}
"#;

pub struct ShaderManager;

impl ShaderManager {
    /// Compiles one stage. Failures are logged and yield `None`.
    pub fn compile<G: Gl>(gl: &G, stage: ShaderStage, source: &str) -> Option<G::Shader> {
        match Self::try_compile(gl, stage, source) {
            Ok(shader) => Some(shader),
            Err(e) => {
                log::error!("An error occurred compiling the shaders: {e}");
                None
            }
        }
    }

    /// Links two compiled stages. Failures are logged and yield `None`.
    pub fn link<G: Gl>(gl: &G, vertex: &G::Shader, fragment: &G::Shader) -> Option<G::Program> {
        match Self::try_link(gl, vertex, fragment) {
            Ok(program) => Some(program),
            Err(e) => {
                log::error!("Unable to initialize the shader program: {e}");
                None
            }
        }
    }

    pub fn try_compile<G: Gl>(gl: &G, stage: ShaderStage, source: &str) -> Result<G::Shader, GfxError> {
        let shader = gl
            .create_shader(stage)
            .ok_or(GfxError::ResourceCreation("shader"))?;
        gl.shader_source(&shader, source);
        gl.compile_shader(&shader);

        if !gl.shader_compiled(&shader) {
            let log = gl.shader_info_log(&shader).unwrap_or_default();
            gl.delete_shader(&shader);
            return Err(GfxError::ShaderCompile { stage, log });
        }
        Ok(shader)
    }

    pub fn try_link<G: Gl>(gl: &G, vertex: &G::Shader, fragment: &G::Shader) -> Result<G::Program, GfxError> {
        let program = gl
            .create_program()
            .ok_or(GfxError::ResourceCreation("program"))?;
        gl.attach_shader(&program, vertex);
        gl.attach_shader(&program, fragment);
        gl.link_program(&program);

        if !gl.program_linked(&program) {
            let log = gl.program_info_log(&program).unwrap_or_default();
            gl.delete_program(&program);
            return Err(GfxError::ProgramLink { log });
        }
        Ok(program)
    }
}
