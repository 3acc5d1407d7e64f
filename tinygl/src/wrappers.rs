//! OpenGL object wrappers
//!
//! Wrappers only hold the object name. [`Handle`] pairs one with the context that created it
//! and deletes it on drop.

use std::borrow::Borrow;
use std::rc::Rc;

mod buffer;
pub use buffer::*;

mod vertex_array;
pub use vertex_array::*;

mod shader;
pub use shader::*;

mod program;
pub use program::*;

mod uniform;
pub use uniform::*;

mod texture;
pub use texture::*;

/// GL objects that need the context to be released
pub trait GlDrop {
    fn drop(&mut self, gl: &crate::Context);
}

/// A GL object deleted through `C` when the handle goes out of scope
pub struct Handle<C: Borrow<crate::Context>, T: GlDrop> {
    gl: C,
    res: T,
}

/// Shares the context, for objects that live as long as the demo
pub type GlHandle<T> = Handle<Rc<crate::Context>, T>;

/// Borrows the context, for objects only needed while building others (shaders before linking)
pub type GlRefHandle<'gl, T> = Handle<&'gl crate::Context, T>;

impl<T: GlDrop> Handle<Rc<crate::Context>, T> {
    pub fn new(gl: &Rc<crate::Context>, res: T) -> Self {
        Self {
            gl: Rc::clone(gl),
            res,
        }
    }
}

impl<'gl, T: GlDrop> Handle<&'gl crate::Context, T> {
    pub fn new(gl: &'gl crate::Context, res: T) -> Self {
        Self { gl, res }
    }
}

impl<C: Borrow<crate::Context>, T: GlDrop> Drop for Handle<C, T> {
    fn drop(&mut self) {
        self.res.drop(self.gl.borrow());
    }
}

impl<C: Borrow<crate::Context>, T: GlDrop> std::ops::Deref for Handle<C, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.res
    }
}
