use std::env;

use learngl::{Demo, Scene};

type DynError = Box<dyn std::error::Error>;

fn main() {
    learngl::log::init();

    if let Err(e) = try_main() {
        eprintln!("[PANIC] {}", e);
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), DynError> {
    let scene = match env::args().nth(1) {
        Some(name) => name.parse::<Scene>()?,
        None => Scene::default(),
    };

    tinygl::boilerplate::desktop::run_boilerplate(Demo::new(scene))?;
    Ok(())
}
