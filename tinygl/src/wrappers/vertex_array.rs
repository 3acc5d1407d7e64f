use crate::context::HasContext;

pub struct VertexArray {
    name: <glow::Context as HasContext>::VertexArray,
}

/// Layout of one vertex attribute, with stride and offset in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub location: u32,
    pub size: i32,
    pub data_type: u32,
    pub normalized: bool,
    pub stride: i32,
    pub offset: i32,
}

impl Attribute {
    /// Float attribute of `size` components, with stride and offset counted in floats
    pub fn floats(location: u32, size: i32, stride: usize, offset: usize) -> Self {
        let float_size = std::mem::size_of::<f32>();

        Self {
            location,
            size,
            data_type: crate::gl::FLOAT,
            normalized: false,
            stride: (stride * float_size) as i32,
            offset: (offset * float_size) as i32,
        }
    }
}

impl VertexArray {
    pub fn new(gl: &crate::Context) -> Result<Self, String> {
        Ok(Self {
            name: unsafe { gl.create_vertex_array() }?,
        })
    }

    pub fn bind(&self, gl: &crate::Context) {
        unsafe { gl.bind_vertex_array(Some(self.name)) }
    }

    pub fn unbind(gl: &crate::Context) {
        unsafe { gl.bind_vertex_array(None) }
    }

    /// Describe `attribute` from the currently bound array buffer and enable it
    pub fn attribute(&self, gl: &crate::Context, attribute: Attribute) {
        self.bind(gl);

        unsafe {
            gl.vertex_attrib_pointer_f32(
                attribute.location,
                attribute.size,
                attribute.data_type,
                attribute.normalized,
                attribute.stride,
                attribute.offset,
            );
            gl.enable_vertex_attrib_array(attribute.location);
        }
    }
}

impl super::GlDrop for VertexArray {
    fn drop(&mut self, gl: &crate::Context) {
        unsafe { gl.delete_vertex_array(self.name) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_attribute_counts_in_bytes() {
        let colour = Attribute::floats(1, 3, 6, 3);

        assert_eq!(colour.location, 1);
        assert_eq!(colour.size, 3);
        assert_eq!(colour.stride, 24);
        assert_eq!(colour.offset, 12);
        assert_eq!(colour.data_type, crate::gl::FLOAT);
        assert!(!colour.normalized);
    }
}
