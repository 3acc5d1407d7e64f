use crate::context::HasContext;

pub struct Buffer {
    name: <glow::Context as HasContext>::Buffer,
}

impl Buffer {
    pub fn new(gl: &crate::Context) -> Result<Self, String> {
        Ok(Self {
            name: unsafe { gl.create_buffer() }?,
        })
    }

    pub fn bind(&self, gl: &crate::Context, target: u32) {
        unsafe { gl.bind_buffer(target, Some(self.name)) }
    }

    /// Bind to `target` and replace the buffer storage with `data`
    pub fn upload<T: bytemuck::Pod>(
        &self,
        gl: &crate::Context,
        target: u32,
        data: &[T],
        usage: u32,
    ) {
        self.bind(gl, target);
        unsafe { gl.buffer_data_u8_slice(target, bytemuck::cast_slice(data), usage) }
    }
}

impl super::GlDrop for Buffer {
    fn drop(&mut self, gl: &crate::Context) {
        unsafe { gl.delete_buffer(self.name) }
    }
}
