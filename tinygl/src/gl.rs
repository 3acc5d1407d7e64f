//! Exposed OpenGL bindings

pub use ::glow::*;
