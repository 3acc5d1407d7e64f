use std::rc::Rc;

use glutin::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::window::WindowBuilder;
use glutin::ContextBuilder;

use crate::context::HasContext;
use crate::{Error, Result};

/// OpenGL version requested from the driver
pub const GL_VERSION: (u8, u8) = (3, 3);

fn log_debug_message(source: u32, message_type: u32, id: u32, severity: u32, message: &str) {
    use crate::gl as Gl;

    let source = match source {
        Gl::DEBUG_SOURCE_API => "opengl::api",
        Gl::DEBUG_SOURCE_WINDOW_SYSTEM => "opengl::window_system",
        Gl::DEBUG_SOURCE_SHADER_COMPILER => "opengl::shader_compiler",
        Gl::DEBUG_SOURCE_THIRD_PARTY => "opengl::third_party",
        Gl::DEBUG_SOURCE_APPLICATION => "opengl::application",
        Gl::DEBUG_SOURCE_OTHER => "opengl::other",
        _ => "opengl::unknown",
    };

    let level = match severity {
        Gl::DEBUG_SEVERITY_HIGH => log::Level::Error,
        Gl::DEBUG_SEVERITY_MEDIUM => log::Level::Warn,
        Gl::DEBUG_SEVERITY_LOW => log::Level::Info,
        Gl::DEBUG_SEVERITY_NOTIFICATION => log::Level::Debug,
        _ => log::Level::Trace,
    };

    let message_type = match message_type {
        Gl::DEBUG_TYPE_ERROR => "error",
        Gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "deprecated behavior",
        Gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "undefined behavior",
        Gl::DEBUG_TYPE_PORTABILITY => "portability",
        Gl::DEBUG_TYPE_PERFORMANCE => "performance",
        Gl::DEBUG_TYPE_MARKER => "marker",
        Gl::DEBUG_TYPE_PUSH_GROUP => "push group",
        Gl::DEBUG_TYPE_POP_GROUP => "pop group",
        Gl::DEBUG_TYPE_OTHER => "other",
        _ => "unknown",
    };

    // Build the record by hand so the module path names the GL message source
    log::logger().log(
        &log::Record::builder()
            .args(format_args!("{} ({}): {}", message_type, id, message))
            .level(level)
            .target("opengl")
            .module_path_static(Some(source))
            .build(),
    );
}

/// Open a window with an OpenGL core context and run `demo` until the window is closed or
/// Escape is pressed
///
/// Logging must be initialized by the caller. Only returns if setting up the window, the
/// context or the demo fails.
pub fn run_boilerplate<T>(mut demo: T) -> Result<()>
where
    T: super::Demo + 'static,
    T::State: 'static,
{
    let el = EventLoop::new();

    let (width, height) = demo.size();
    let wb = WindowBuilder::new()
        .with_title(demo.title())
        .with_inner_size(glutin::dpi::LogicalSize::new(width, height));

    let windowed_context = ContextBuilder::new()
        .with_gl(glutin::GlRequest::Specific(glutin::Api::OpenGl, GL_VERSION))
        .with_gl_profile(glutin::GlProfile::Core)
        .with_gl_debug_flag(cfg!(debug_assertions))
        .with_vsync(true)
        .build_windowed(wb, &el)
        .map_err(|e| Error::Window(e.to_string()))?;

    let windowed_context = unsafe { windowed_context.make_current() }
        .map_err(|(_, e)| Error::Window(e.to_string()))?;

    let mut gl = unsafe {
        crate::Context::from_loader_function(|s| windowed_context.get_proc_address(s) as *const _)
    };

    // Route driver messages to the logger when the driver can report them
    if gl.supported_extensions().contains("GL_KHR_debug") {
        unsafe { gl.debug_message_callback(log_debug_message) };
    } else {
        log::debug!("GL_KHR_debug is not supported, driver messages are not logged");
    }

    let gl = Rc::new(gl);

    let size = windowed_context.window().inner_size();
    unsafe { gl.viewport(0, 0, size.width as i32, size.height as i32) };

    let mut state = demo.init(&gl).map_err(|e| Error::Init(e.to_string()))?;

    el.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::LoopDestroyed => (),
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(physical_size) => {
                    windowed_context.resize(physical_size);
                    unsafe {
                        gl.viewport(
                            0,
                            0,
                            physical_size.width as i32,
                            physical_size.height as i32,
                        );
                    }
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state == ElementState::Pressed
                        && input.virtual_keycode == Some(VirtualKeyCode::Escape)
                    {
                        *control_flow = ControlFlow::Exit;
                    }
                }
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                _ => (),
            },
            Event::MainEventsCleared => windowed_context.window().request_redraw(),
            Event::RedrawRequested(_) => {
                demo.render(&gl, &mut state);

                if let Err(e) = windowed_context.swap_buffers() {
                    log::error!("failed to swap buffers: {}", e);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => (),
        }
    })
}
