use std::path::Path;

use log::debug;

use crate::context::HasContext;
use crate::{gl, Error, Result};

pub struct Texture {
    name: <glow::Context as HasContext>::Texture,
}

/// Decode the image at `path` as RGBA8, bottom row first as GL expects
pub fn load_rgba(path: impl AsRef<Path>) -> Result<image::RgbaImage> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|e| Error::Image(path.to_owned(), e))?;

    Ok(image.flipv().to_rgba8())
}

impl Texture {
    pub fn new(gl: &crate::Context) -> std::result::Result<Self, String> {
        Ok(Self {
            name: unsafe { gl.create_texture() }?,
        })
    }

    /// Create a repeating, linearly filtered 2D texture from an image file
    pub fn from_image(gl: &crate::Context, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = load_rgba(path)?;
        let (width, height) = image.dimensions();
        debug!("uploading {} ({}x{})", path.display(), width, height);

        let this = Self::new(gl)?;
        this.bind(gl, gl::TEXTURE_2D);

        this.parameter(gl, gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::REPEAT);
        this.parameter(gl, gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::REPEAT);
        this.parameter(gl, gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR);
        this.parameter(gl, gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR);

        unsafe {
            gl.tex_image_2d(
                gl::TEXTURE_2D,
                0,
                gl::RGBA8 as i32,
                width as i32,
                height as i32,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                Some(image.as_raw()),
            );
            gl.generate_mipmap(gl::TEXTURE_2D);
            gl.bind_texture(gl::TEXTURE_2D, None);
        }

        Ok(this)
    }

    pub fn bind(&self, gl: &crate::Context, target: u32) {
        unsafe { gl.bind_texture(target, Some(self.name)) }
    }

    /// Bind to `TEXTURE_2D` on texture unit `unit`
    pub fn bind_unit(&self, gl: &crate::Context, unit: u32) {
        unsafe { gl.active_texture(gl::TEXTURE0 + unit) };
        self.bind(gl, gl::TEXTURE_2D);
    }

    /// Set an integer parameter, the texture must be bound to `target`
    pub fn parameter(&self, gl: &crate::Context, target: u32, pname: u32, value: u32) {
        unsafe { gl.tex_parameter_i32(target, pname, value as i32) }
    }
}

impl super::GlDrop for Texture {
    fn drop(&mut self, gl: &crate::Context) {
        unsafe { gl.delete_texture(self.name) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn images_are_flipped_and_expanded() {
        let path = std::env::temp_dir().join(format!("tinygl-{}-flip.ppm", std::process::id()));
        // 1x2 image: red on top, blue at the bottom
        fs::write(&path, "P3\n1 2\n255\n255 0 0\n0 0 255\n").unwrap();

        let image = load_rgba(&path);
        let _ = fs::remove_file(&path);
        let image = image.unwrap();

        assert_eq!(image.dimensions(), (1, 2));
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(image.get_pixel(0, 1).0, [255, 0, 0, 255]);
    }

    #[test]
    fn missing_image_is_an_error() {
        let result = load_rgba("/nonexistent/tinygl/texture.png");

        assert!(matches!(result, Err(Error::Image(_, _))));
    }
}
