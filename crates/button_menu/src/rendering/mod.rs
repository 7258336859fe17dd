//! Menu rendering types
//!
//! Draw commands emitted by the widget layer. Actual pixel work lives
//! behind the [`crate::backend::MenuRenderBackend`] trait.

pub mod commands;

pub use commands::{DrawQuad, TextureId};
