//! Grid setup and terminal visualization around the gridstar search engine.
//!
//! - [`scenario`]: grid dimensions, endpoints and obstacles, from JSON or
//!   interactive prompts, plus random obstacle placement.
//! - [`render`]: turns a grid and a search result into a [`Canvas`] and
//!   paints it with crossterm colors or plain glyphs.
//! - [`config`]: display and search settings loaded from JSON.
//!
//! The search engine never depends on this crate.

pub mod config;
pub mod error;
pub mod prompt;
pub mod render;
pub mod scenario;

pub use config::{Color, Glyphs, Palette, VizConfig};
pub use error::VizError;
pub use prompt::{Prompter, parse_point};
pub use render::{Canvas, Mark, paint, redraw_rows, summary};
pub use scenario::{Scenario, ScenarioDraft, clear_endpoints, place_random_obstacles};

/// Install `env_logger` as the `log` backend, filtered by `RUST_LOG` and
/// showing warnings and above when it is unset. Fails if a logger is
/// already installed.
pub fn init_logging() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_installs_once() {
        assert!(init_logging().is_ok());
        assert!(init_logging().is_err());
    }
}
