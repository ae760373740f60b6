use std::path::PathBuf;

use quill_buffer::model::{style::ColorScheme, viewport::WindowSettings};

#[derive(Debug, Default)]
pub struct Settings {
    pub color_scheme: ColorScheme,
    pub startup_path: Option<PathBuf>,
    pub window: WindowSettings,
}
