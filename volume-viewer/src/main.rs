use std::path::Path;

use bevy::app::AppExit;

use constants::path::CONFIG_PATH;
use volume_viewer::engine::core::app_setup::{create_app, prepare_startup};

fn main() {
    let startup = match prepare_startup(Path::new(CONFIG_PATH)) {
        Ok(startup) => startup,
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    };

    if let AppExit::Error(code) = create_app(startup).run() {
        std::process::exit(i32::from(code.get()));
    }
}
