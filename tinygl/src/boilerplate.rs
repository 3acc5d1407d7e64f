pub mod desktop;

use std::rc::Rc;

use crate::Context;

/// A demo driven by the desktop boilerplate: built once, then rendered every frame
pub trait Demo {
    type State;
    type Error: std::fmt::Display;

    fn init(&mut self, gl: &Rc<Context>) -> Result<Self::State, Self::Error>;
    fn render(&mut self, gl: &Context, state: &mut Self::State);

    fn title(&self) -> String {
        "tinygl demo".to_owned()
    }

    /// Initial logical window size
    fn size(&self) -> (u32, u32) {
        (800, 600)
    }
}
