// Shader Pipeline
// Builds the textured-quad program and resolves its locations once
// Responsibilities:
// - Compile the vertex/fragment pair and link them
// - Cache attribute and uniform locations for the draw loop
// - Degrade to an empty pipeline when either stage fails

use crate::gpu::backend::{Gl, ShaderStage};
use crate::gpu::shaders::{FRAGMENT_SHADER_SOURCE, ShaderManager, VERTEX_SHADER_SOURCE};

pub const VERTEX_POSITION_ATTRIB: &str = "aVertexPosition";
pub const TEXTURE_COORD_ATTRIB: &str = "aTextureCoord";
pub const PROJECTION_MATRIX_UNIFORM: &str = "uProjectionMatrix";
pub const MODEL_VIEW_MATRIX_UNIFORM: &str = "uModelViewMatrix";
pub const SAMPLER_UNIFORM: &str = "uSampler";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttribLocations {
    pub vertex_position: Option<u32>,
    pub texture_coord: Option<u32>,
}

pub struct UniformLocations<G: Gl> {
    pub projection_matrix: Option<G::UniformLocation>,
    pub model_view_matrix: Option<G::UniformLocation>,
    pub sampler: Option<G::UniformLocation>,
}

impl<G: Gl> Default for UniformLocations<G> {
    fn default() -> Self {
        Self {
            projection_matrix: None,
            model_view_matrix: None,
            sampler: None,
        }
    }
}

/// Linked program plus the locations the draw loop binds against.
pub struct ProgramInfo<G: Gl> {
    pub program: Option<G::Program>,
    pub attrib_locations: AttribLocations,
    pub uniform_locations: UniformLocations<G>,
}

impl<G: Gl> ProgramInfo<G> {
    pub fn is_ready(&self) -> bool {
        self.program.is_some()
    }

    fn empty() -> Self {
        Self {
            program: None,
            attrib_locations: AttribLocations::default(),
            uniform_locations: UniformLocations::default(),
        }
    }
}

fn attrib<G: Gl>(gl: &G, program: &G::Program, name: &str) -> Option<u32> {
    let location = u32::try_from(gl.attrib_location(program, name)).ok();
    if location.is_none() {
        log::warn!("attribute {name} is not active in the program");
    }
    location
}

fn uniform<G: Gl>(gl: &G, program: &G::Program, name: &str) -> Option<G::UniformLocation> {
    let location = gl.uniform_location(program, name);
    if location.is_none() {
        log::warn!("uniform {name} is not active in the program");
    }
    location
}

/// Compiles and links the textured-quad program.
///
/// Never fails outright: any compile or link error has already been logged,
/// and the result simply carries no program and no locations.
pub fn build_pipeline<G: Gl>(gl: &G) -> ProgramInfo<G> {
    let vertex = ShaderManager::compile(gl, ShaderStage::Vertex, VERTEX_SHADER_SOURCE);
    let fragment = ShaderManager::compile(gl, ShaderStage::Fragment, FRAGMENT_SHADER_SOURCE);

    let (vertex, fragment) = match (vertex, fragment) {
        (Some(vertex), Some(fragment)) => (vertex, fragment),
        (vertex, fragment) => {
            for survivor in vertex.iter().chain(fragment.iter()) {
                gl.delete_shader(survivor);
            }
            log::warn!("skipping program link after shader failure");
            return ProgramInfo::empty();
        }
    };

    let Some(program) = ShaderManager::link(gl, &vertex, &fragment) else {
        return ProgramInfo::empty();
    };

    ProgramInfo {
        attrib_locations: AttribLocations {
            vertex_position: attrib(gl, &program, VERTEX_POSITION_ATTRIB),
            texture_coord: attrib(gl, &program, TEXTURE_COORD_ATTRIB),
        },
        uniform_locations: UniformLocations {
            projection_matrix: uniform(gl, &program, PROJECTION_MATRIX_UNIFORM),
            model_view_matrix: uniform(gl, &program, MODEL_VIEW_MATRIX_UNIFORM),
            sampler: uniform(gl, &program, SAMPLER_UNIFORM),
        },
        program: Some(program),
    }
}
