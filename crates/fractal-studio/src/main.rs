//! Drag a square over the fractal to zoom into it.
//!
//! Left-drag selects, right-click or Backspace steps back, R/Home resets,
//! Escape quits.

mod app;
mod bindings;
mod explorer;

use fractal_engine::logging::{init_logging, LoggingConfig};

use crate::explorer::Explorer;

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = Explorer::new().run() {
        log::error!("fractal explorer failed: {e:#}");
        std::process::exit(1);
    }
}
