//! Small OpenGL playground: one shape, one program, drawn every frame

use std::rc::Rc;
use std::time::Instant;

use ::log::info;

use tinygl::gl;
use tinygl::prelude::*;
use tinygl::wrappers::{GlRefHandle, Program, Shader, ShaderKind, Texture, VertexArray};

pub mod log;

mod scene;
pub use scene::*;

mod shape;
pub use shape::Shape;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

/// Compile each shader file, stage guessed from its name, and link them together
pub fn build_program<P: AsRef<std::path::Path>>(
    gl: &tinygl::Context,
    paths: &[P],
) -> tinygl::Result<Program> {
    let shaders = paths
        .iter()
        .map(|path| -> tinygl::Result<_> {
            let path = path.as_ref();
            let kind = ShaderKind::from_path(path)
                .ok_or_else(|| tinygl::Error::UnknownShaderKind(path.to_owned()))?;

            Ok(GlRefHandle::new(gl, Shader::from_file(gl, kind, path)?))
        })
        .collect::<tinygl::Result<Vec<_>>>()?;

    let shaders: Vec<&Shader> = shaders.iter().map(|shader| &**shader).collect();
    Program::link(gl, &shaders)
}

pub struct Demo {
    scene: Scene,
}

impl Demo {
    pub fn new(scene: Scene) -> Self {
        Self { scene }
    }
}

pub struct State {
    shape: Shape,
    program: GlHandle<Program>,
    texture: Option<GlHandle<Texture>>,
    started: Instant,
}

impl tinygl::boilerplate::Demo for Demo {
    type State = State;
    type Error = tinygl::Error;

    fn init(&mut self, gl: &Rc<tinygl::Context>) -> tinygl::Result<State> {
        let mesh = self.scene.mesh();

        let mut shape = Shape::new(gl)?;
        shape.load_vertices(gl, mesh.vertices);
        shape.load_indices(gl, mesh.indices);
        for attribute in mesh.layout() {
            shape.interpret_and_enable(gl, attribute);
        }
        VertexArray::unbind(gl);

        let shaders: Vec<_> = self.scene.shaders().iter().map(asset_path).collect();
        let program = GlHandle::new(gl, build_program(gl, &shaders)?);

        let texture = match self.scene.texture() {
            Some(path) => {
                program.set_uniform(gl, "ourTexture", 0i32);
                Some(GlHandle::new(gl, Texture::from_image(gl, asset_path(path))?))
            }
            None => None,
        };

        info!(
            "{} scene ready, {} vertices, {} elements",
            self.scene,
            mesh.vertex_count(),
            shape.element_count()
        );

        Ok(State {
            shape,
            program,
            texture,
            started: Instant::now(),
        })
    }

    fn render(&mut self, gl: &tinygl::Context, state: &mut State) {
        unsafe {
            gl.clear_color(0.8, 0.8, 0.8, 1.0);
            gl.clear(gl::COLOR_BUFFER_BIT);
        }

        state.program.use_program(gl);

        if self.scene == Scene::Square {
            let green = pulse(state.started.elapsed().as_secs_f32());
            state
                .program
                .set_uniform(gl, "ourColour", cgmath::vec4(0.0, green, 0.0, 1.0));
        }

        if let Some(texture) = &state.texture {
            texture.bind_unit(gl, 0);
        }

        state.shape.draw(gl);
        VertexArray::unbind(gl);
    }

    fn title(&self) -> String {
        format!("learngl: {}", self.scene)
    }

    fn size(&self) -> (u32, u32) {
        (WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}
