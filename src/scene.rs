use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tinygl::wrappers::Attribute;

/// Geometry of a scene, interleaved vertex attributes indexed by triangles
#[derive(Debug, Clone, Copy)]
pub struct Mesh {
    pub vertices: &'static [f32],
    pub indices: &'static [u32],
    /// Floats per vertex
    pub stride: usize,
    /// `(location, size, offset)` of each float attribute
    pub attributes: &'static [(u32, i32, usize)],
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.stride
    }

    /// Vertex buffer layout, one float attribute per entry of `attributes`
    pub fn layout(&self) -> Vec<Attribute> {
        self.attributes
            .iter()
            .map(|&(location, size, offset)| {
                Attribute::floats(location, size, self.stride, offset)
            })
            .collect()
    }
}

#[rustfmt::skip]
const SQUARE_VERTICES: [f32; 12] = [
     0.5,  0.5, 0.0, // top right
     0.5, -0.5, 0.0, // bottom right
    -0.5, -0.5, 0.0, // bottom left
    -0.5,  0.5, 0.0, // top left
];

const SQUARE_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

#[rustfmt::skip]
const TRIANGLE_VERTICES: [f32; 18] = [
    // position       colour
     0.5, -0.5, 0.0,  1.0, 0.0, 0.0,
    -0.5, -0.5, 0.0,  0.0, 1.0, 0.0,
     0.0,  0.5, 0.0,  0.0, 0.0, 1.0,
];

const TRIANGLE_INDICES: [u32; 3] = [0, 1, 2];

#[rustfmt::skip]
const TEXTURED_VERTICES: [f32; 20] = [
    // position       uv
     0.5,  0.5, 0.0,  1.0, 1.0,
     0.5, -0.5, 0.0,  1.0, 0.0,
    -0.5, -0.5, 0.0,  0.0, 0.0,
    -0.5,  0.5, 0.0,  0.0, 1.0,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// Flat square whose colour pulses over time
    Square,
    /// Triangle with per-vertex colours
    Triangle,
    /// Square sampling a texture
    Textured,
}

impl Default for Scene {
    fn default() -> Self {
        Self::Triangle
    }
}

impl FromStr for Scene {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(Self::Square),
            "triangle" => Ok(Self::Triangle),
            "textured" => Ok(Self::Textured),
            other => Err(format!(
                "unknown scene {:?}, expected square, triangle or textured",
                other
            )),
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Textured => "textured",
        };

        write!(f, "{}", name)
    }
}

impl Scene {
    pub fn mesh(self) -> Mesh {
        match self {
            Self::Square => Mesh {
                vertices: &SQUARE_VERTICES,
                indices: &SQUARE_INDICES,
                stride: 3,
                attributes: &[(0, 3, 0)],
            },
            Self::Triangle => Mesh {
                vertices: &TRIANGLE_VERTICES,
                indices: &TRIANGLE_INDICES,
                stride: 6,
                attributes: &[(0, 3, 0), (1, 3, 3)],
            },
            Self::Textured => Mesh {
                vertices: &TEXTURED_VERTICES,
                indices: &SQUARE_INDICES,
                stride: 5,
                attributes: &[(0, 3, 0), (1, 2, 3)],
            },
        }
    }

    /// Vertex and fragment shader files, relative to the asset directory
    pub fn shaders(self) -> [&'static str; 2] {
        match self {
            Self::Square => ["shaders/simple_vertex.glsl", "shaders/simple_fragment.glsl"],
            Self::Triangle => [
                "shaders/colourful_vertex.glsl",
                "shaders/colourful_fragment.glsl",
            ],
            Self::Textured => [
                "shaders/textured_vertex.glsl",
                "shaders/textured_fragment.glsl",
            ],
        }
    }

    pub fn texture(self) -> Option<&'static str> {
        match self {
            Self::Textured => Some("textures/checker.ppm"),
            _ => None,
        }
    }
}

/// Resolve an asset against `LEARNGL_ASSETS`, or the crate directory when unset
pub fn asset_path(relative: impl AsRef<Path>) -> PathBuf {
    env::var_os("LEARNGL_ASSETS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")))
        .join(relative)
}

/// Green channel of the square scene at `seconds`, oscillating in [0, 1]
pub fn pulse(seconds: f32) -> f32 {
    seconds.sin() / 2.0 + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Scene; 3] = [Scene::Square, Scene::Triangle, Scene::Textured];

    #[test]
    fn scene_names_round_trip() {
        for scene in ALL.iter() {
            assert_eq!(scene.to_string().parse::<Scene>(), Ok(*scene));
        }

        assert_eq!(Scene::default(), Scene::Triangle);
        assert!("cube".parse::<Scene>().is_err());
    }

    #[test]
    fn meshes_are_consistent() {
        for scene in ALL.iter() {
            let mesh = scene.mesh();

            assert_eq!(mesh.vertices.len() % mesh.stride, 0, "{}", scene);
            assert_eq!(mesh.indices.len() % 3, 0, "{}", scene);
            assert!(
                mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()),
                "{}",
                scene
            );

            let floats: i32 = mesh.attributes.iter().map(|&(_, size, _)| size).sum();
            assert_eq!(floats as usize, mesh.stride, "{}", scene);

            for &(_, size, offset) in mesh.attributes {
                assert!(offset + size as usize <= mesh.stride, "{}", scene);
            }
        }
    }

    #[test]
    fn triangle_layout_interleaves_position_and_colour() {
        let layout = Scene::Triangle.mesh().layout();

        assert_eq!(layout.len(), 2);
        assert_eq!((layout[0].location, layout[0].size), (0, 3));
        assert_eq!((layout[0].stride, layout[0].offset), (24, 0));
        assert_eq!((layout[1].location, layout[1].size), (1, 3));
        assert_eq!((layout[1].stride, layout[1].offset), (24, 12));
        assert!(layout
            .iter()
            .all(|a| a.data_type == tinygl::gl::FLOAT && !a.normalized));
    }

    #[test]
    fn textured_layout_ends_with_uv() {
        let layout = Scene::Textured.mesh().layout();
        let uv = layout.last().unwrap();

        assert_eq!((uv.location, uv.size), (1, 2));
        assert_eq!((uv.stride, uv.offset), (20, 12));
    }

    #[test]
    fn assets_exist() {
        for scene in ALL.iter() {
            for shader in scene.shaders().iter() {
                let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(shader);
                assert!(path.is_file(), "{}", path.display());
                assert!(tinygl::wrappers::ShaderKind::from_path(&path).is_some());
            }

            if let Some(texture) = scene.texture() {
                let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(texture);
                assert!(tinygl::wrappers::load_rgba(&path).is_ok());
            }
        }
    }

    #[test]
    fn pulse_stays_in_range() {
        assert!((pulse(0.0) - 0.5).abs() < 1e-6);
        assert!((pulse(std::f32::consts::FRAC_PI_2) - 1.0).abs() < 1e-6);

        for i in 0..100 {
            let value = pulse(i as f32 * 0.37);
            assert!((0.0..=1.0).contains(&value));
        }
    }
}
