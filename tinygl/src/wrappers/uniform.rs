use cgmath::{Vector2, Vector3, Vector4};

use crate::context::{Context, HasContext};

type Location = <glow::Context as HasContext>::UniformLocation;

/// Values that can be written to a uniform of the current program
pub trait Uniform {
    /// # Safety
    ///
    /// The program owning `location` must be in use on `gl`.
    unsafe fn apply(&self, gl: &Context, location: Option<&Location>);
}

macro_rules! impl_uniform {
    ($t:ty, $one:ident, $two:ident, $three:ident, $four:ident) => {
        impl Uniform for $t {
            unsafe fn apply(&self, gl: &Context, location: Option<&Location>) {
                gl.$one(location, *self)
            }
        }

        impl Uniform for Vector2<$t> {
            unsafe fn apply(&self, gl: &Context, location: Option<&Location>) {
                gl.$two(location, self.x, self.y)
            }
        }

        impl Uniform for Vector3<$t> {
            unsafe fn apply(&self, gl: &Context, location: Option<&Location>) {
                gl.$three(location, self.x, self.y, self.z)
            }
        }

        impl Uniform for Vector4<$t> {
            unsafe fn apply(&self, gl: &Context, location: Option<&Location>) {
                gl.$four(location, self.x, self.y, self.z, self.w)
            }
        }
    };
}

impl_uniform!(i32, uniform_1_i32, uniform_2_i32, uniform_3_i32, uniform_4_i32);
impl_uniform!(u32, uniform_1_u32, uniform_2_u32, uniform_3_u32, uniform_4_u32);
impl_uniform!(f32, uniform_1_f32, uniform_2_f32, uniform_3_f32, uniform_4_f32);
