use owo_colors::Style;

pub const ERROR_COLOR: Style = Style::new().red();
pub const IMPORTED_MARKER: Style = Style::new().green();
