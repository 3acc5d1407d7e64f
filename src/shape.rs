use std::rc::Rc;

use tinygl::gl;
use tinygl::prelude::*;
use tinygl::wrappers::{Attribute, Buffer, VertexArray};

/// Indexed triangle mesh: a vertex array with its vertex and index buffers
pub struct Shape {
    vao: GlHandle<VertexArray>,
    vbo: GlHandle<Buffer>,
    ebo: GlHandle<Buffer>,
    element_count: i32,
}

impl Shape {
    pub fn new(gl: &Rc<tinygl::Context>) -> tinygl::Result<Self> {
        Ok(Self {
            vao: GlHandle::new(gl, VertexArray::new(gl)?),
            vbo: GlHandle::new(gl, Buffer::new(gl)?),
            ebo: GlHandle::new(gl, Buffer::new(gl)?),
            element_count: 0,
        })
    }

    pub fn load_vertices(&mut self, gl: &tinygl::Context, vertices: &[f32]) {
        self.vao.bind(gl);
        self.vbo
            .upload(gl, gl::ARRAY_BUFFER, vertices, gl::STATIC_DRAW);
    }

    /// Upload indices, each group of three making a triangle
    pub fn load_indices(&mut self, gl: &tinygl::Context, indices: &[u32]) {
        self.vao.bind(gl);
        self.ebo
            .upload(gl, gl::ELEMENT_ARRAY_BUFFER, indices, gl::STATIC_DRAW);
        self.element_count = indices.len() as i32;
    }

    /// Describe an attribute of the vertex buffer and enable it
    pub fn interpret_and_enable(&mut self, gl: &tinygl::Context, attribute: Attribute) {
        self.vbo.bind(gl, gl::ARRAY_BUFFER);
        self.vao.attribute(gl, attribute);
    }

    pub fn element_count(&self) -> i32 {
        self.element_count
    }

    pub fn draw(&self, gl: &tinygl::Context) {
        self.vao.bind(gl);
        unsafe { gl.draw_elements(gl::TRIANGLES, self.element_count, gl::UNSIGNED_INT, 0) };
    }
}
