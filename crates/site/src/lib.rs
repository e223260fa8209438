//! Page rendering, static export and settings shared by the preview server and the CLI.

pub mod config;
pub mod export;
pub mod render;

pub use config::{load_settings, Settings};
pub use export::{export_site, ExportReport};
pub use render::render_page;
