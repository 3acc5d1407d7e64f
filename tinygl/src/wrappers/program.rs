use log::trace;

use crate::context::{Context, HasContext};
use crate::{Error, Result};

use super::{Shader, Uniform};

pub struct Program {
    name: <glow::Context as HasContext>::Program,
}

impl Program {
    /// Attach `shaders` to a new program and link it
    ///
    /// The shaders can be deleted once this returns.
    pub fn link(gl: &Context, shaders: &[&Shader]) -> Result<Self> {
        unsafe {
            let name = gl.create_program()?;

            for shader in shaders {
                gl.attach_shader(name, shader.name());
            }

            gl.link_program(name);

            for shader in shaders {
                gl.detach_shader(name, shader.name());
            }

            if !gl.get_program_link_status(name) {
                let log = gl.get_program_info_log(name);
                gl.delete_program(name);
                return Err(Error::Link { log });
            }

            Ok(Self { name })
        }
    }

    pub fn use_program(&self, gl: &Context) {
        unsafe { gl.use_program(Some(self.name)) }
    }

    /// Use this program and set the uniform `name`
    ///
    /// Unknown uniforms are ignored, as GL does for location -1.
    pub fn set_uniform(&self, gl: &Context, name: &str, value: impl Uniform) {
        self.use_program(gl);

        unsafe {
            let location = gl.get_uniform_location(self.name, name);
            if location.is_none() {
                trace!("uniform {} is not active", name);
            }

            value.apply(gl, location.as_ref());
        }
    }
}

impl super::GlDrop for Program {
    fn drop(&mut self, gl: &Context) {
        unsafe { gl.delete_program(self.name) }
    }
}
