// GPU module - organizes all WebGL-related functionality
// This module provides abstractions for WebGL operations including:
// - The backend trait and its browser implementation
// - Context acquisition from the game canvas
// - Shader compilation and program linking
// - Quad geometry and card texture upload
// - The per-game render session that draws each frame

pub mod backend;
pub mod context;
pub mod geometry;
pub mod pipeline;
pub mod scene;
pub mod shaders;
pub mod texture;
pub mod utils;
