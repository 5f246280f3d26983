// Card Texture
// Placeholder-then-image texture loading
// - A 1x1 opaque blue pixel is uploaded synchronously so the first frames
//   always have something bound
// - The real image is fetched in the background and replaces the
//   placeholder exactly once; a failed fetch leaves the placeholder in place

use crate::error::GfxError;
use crate::gpu::backend::{Gl, ImageRequest};

/// RGBA bytes of the placeholder texel.
pub const PLACEHOLDER_PIXEL: [u8; 4] = [0, 0, 255, 255];

pub struct TextureSet<G: Gl> {
    pub texture: G::Texture,
}

/// Image fetch that has not yet been applied to its texture.
#[must_use = "the texture keeps its placeholder until this is awaited"]
pub struct PendingTexture<G: Gl> {
    gl: G,
    texture: G::Texture,
    image: ImageRequest<G::Image>,
}

impl<G: Gl> PendingTexture<G> {
    /// Waits for the image and uploads it. Returns whether the placeholder
    /// was replaced.
    pub async fn resolve(self) -> bool {
        let Some(image) = self.image.await else {
            return false;
        };

        self.gl.bind_texture_2d(&self.texture);
        if let Err(e) = self.gl.tex_image_2d_image(&image) {
            log::debug!("keeping placeholder texture: {e}");
            return false;
        }
        self.gl.generate_mipmap_2d();
        true
    }
}

/// Creates the card texture with its placeholder and starts fetching `src`.
pub fn build_texture<G: Gl>(gl: &G, src: &str) -> Result<(TextureSet<G>, PendingTexture<G>), GfxError> {
    let texture = gl
        .create_texture()
        .ok_or(GfxError::ResourceCreation("texture"))?;
    gl.bind_texture_2d(&texture);
    gl.tex_image_2d_pixels(1, 1, &PLACEHOLDER_PIXEL)?;

    let pending = PendingTexture {
        gl: gl.clone(),
        texture: texture.clone(),
        image: gl.request_image(src),
    };
    Ok((TextureSet { texture }, pending))
}
