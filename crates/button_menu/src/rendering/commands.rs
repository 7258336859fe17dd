//! Menu draw commands

use crate::foundation::math::{Color, Rect};

/// Handle to a texture owned by the host renderer
///
/// The menu layer never touches pixel data; it only forwards this handle
/// back to the backend together with a destination rectangle and tint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TextureId(pub u32);

/// Request to paint one textured, tinted quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawQuad {
    /// Texture to sample
    pub texture: TextureId,

    /// Destination rectangle in screen pixels (collection offset applied)
    pub dest: Rect,

    /// RGBA tint multiplied over the texture
    pub tint: Color,
}
