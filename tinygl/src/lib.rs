pub mod boilerplate;

mod context;
pub use context::*;

mod errors;
pub use errors::*;

pub mod gl;
pub mod wrappers;

pub use glow;

pub mod prelude {
    pub use super::glow::HasContext;

    pub use super::wrappers::{GlHandle, Uniform};

    pub use cgmath;
}
