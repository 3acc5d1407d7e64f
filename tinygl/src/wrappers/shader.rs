use std::fs;
use std::path::Path;

use log::debug;

use crate::context::{Context, HasContext};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    Vertex,
    Fragment,
    Geometry,
    Compute,
}

impl ShaderKind {
    pub fn gl_kind(self) -> u32 {
        match self {
            Self::Vertex => crate::gl::VERTEX_SHADER,
            Self::Fragment => crate::gl::FRAGMENT_SHADER,
            Self::Geometry => crate::gl::GEOMETRY_SHADER,
            Self::Compute => crate::gl::COMPUTE_SHADER,
        }
    }

    pub fn constant_name(self) -> &'static str {
        match self {
            Self::Vertex => "GL_VERTEX_SHADER",
            Self::Fragment => "GL_FRAGMENT_SHADER",
            Self::Geometry => "GL_GEOMETRY_SHADER",
            Self::Compute => "GL_COMPUTE_SHADER",
        }
    }

    /// Guess the stage from `.vert`-style extensions, or from a `_vertex.glsl`-style suffix
    pub fn from_path(p: impl AsRef<Path>) -> Option<Self> {
        let p = p.as_ref();

        match p.extension()?.to_str()? {
            "vert" | "vs" => Some(Self::Vertex),
            "frag" | "fs" => Some(Self::Fragment),
            "geom" | "gs" => Some(Self::Geometry),
            "comp" | "cs" => Some(Self::Compute),
            "glsl" => {
                let stem = p.file_stem()?.to_str()?;
                let suffix = &stem[stem.rfind('_')? + 1..];

                match suffix {
                    "vertex" => Some(Self::Vertex),
                    "fragment" => Some(Self::Fragment),
                    "geometry" => Some(Self::Geometry),
                    "compute" => Some(Self::Compute),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

pub struct Shader {
    name: <glow::Context as HasContext>::Shader,
}

impl Shader {
    /// Compile GLSL source text
    pub fn from_source(gl: &Context, kind: ShaderKind, source: &str) -> Result<Self> {
        unsafe {
            let name = gl.create_shader(kind.gl_kind())?;
            gl.shader_source(name, source);
            gl.compile_shader(name);

            if !gl.get_shader_compile_status(name) {
                let log = gl.get_shader_info_log(name);
                gl.delete_shader(name);
                return Err(Error::Compile { kind, log });
            }

            Ok(Self { name })
        }
    }

    /// Read the whole file at `path` and compile it
    pub fn from_file(gl: &Context, kind: ShaderKind, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| Error::Io(path.to_owned(), e))?;

        debug!("compiling {} from {}", kind.constant_name(), path.display());
        Self::from_source(gl, kind, &source)
    }

    pub fn name(&self) -> <glow::Context as HasContext>::Shader {
        self.name
    }
}

impl super::GlDrop for Shader {
    fn drop(&mut self, gl: &Context) {
        unsafe { gl.delete_shader(self.name) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_extension() {
        assert_eq!(ShaderKind::from_path("display.vert"), Some(ShaderKind::Vertex));
        assert_eq!(ShaderKind::from_path("display.frag"), Some(ShaderKind::Fragment));
        assert_eq!(ShaderKind::from_path("init.comp"), Some(ShaderKind::Compute));
        assert_eq!(ShaderKind::from_path("lines.gs"), Some(ShaderKind::Geometry));
    }

    #[test]
    fn kind_from_glsl_suffix() {
        assert_eq!(
            ShaderKind::from_path("shaders/colourful_vertex.glsl"),
            Some(ShaderKind::Vertex)
        );
        assert_eq!(
            ShaderKind::from_path("shaders/colourful_fragment.glsl"),
            Some(ShaderKind::Fragment)
        );
        assert_eq!(ShaderKind::from_path("shaders/common.glsl"), None);
        assert_eq!(ShaderKind::from_path("shaders/colourful_pixel.glsl"), None);
    }

    #[test]
    fn kinds_map_to_gl_stages() {
        let kinds = [
            (ShaderKind::Vertex, crate::gl::VERTEX_SHADER, "GL_VERTEX_SHADER"),
            (ShaderKind::Fragment, crate::gl::FRAGMENT_SHADER, "GL_FRAGMENT_SHADER"),
            (ShaderKind::Geometry, crate::gl::GEOMETRY_SHADER, "GL_GEOMETRY_SHADER"),
            (ShaderKind::Compute, crate::gl::COMPUTE_SHADER, "GL_COMPUTE_SHADER"),
        ];

        for &(kind, gl_kind, constant_name) in kinds.iter() {
            assert_eq!(kind.gl_kind(), gl_kind);
            assert_eq!(kind.constant_name(), constant_name);
        }
    }

    #[test]
    fn unknown_kinds() {
        assert_eq!(ShaderKind::from_path("README"), None);
        assert_eq!(ShaderKind::from_path("notes.txt"), None);
    }

    #[test]
    fn compile_errors_name_the_stage() {
        let error = Error::Compile {
            kind: ShaderKind::Fragment,
            log: "0:1(1): error: syntax error".to_owned(),
        };

        assert_eq!(
            error.to_string(),
            "shader compile error for shader type GL_FRAGMENT_SHADER: 0:1(1): error: syntax error"
        );
    }
}
