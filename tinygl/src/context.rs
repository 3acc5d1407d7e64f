/// OpenGL function context
pub type Context = glow::Context;

pub use glow::HasContext;
