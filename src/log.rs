use std::sync::Once;

static LOG_INIT: Once = Once::new();

/// Install the logger, configured by `LEARNGL_LOG` and `LEARNGL_LOG_STYLE`
pub fn init() {
    LOG_INIT.call_once(|| {
        env_logger::init_from_env(
            env_logger::Env::new()
                .filter_or("LEARNGL_LOG", "opengl=debug,learngl=debug,tinygl=debug")
                .write_style("LEARNGL_LOG_STYLE"),
        );
    });
}
