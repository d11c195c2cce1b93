pub const WINDOW_TITLE: &str = "Plamo Translation";
pub const WINDOW_SIZE: [f32; 2] = [1200.0, 600.0];

pub const PANEL_HEADERS: &str = "panel_headers";
pub const PANEL_STATUS: &str = "panel_status";
pub const SCROLL_INPUT: &str = "scroll_input";
pub const SCROLL_OUTPUT: &str = "scroll_output";

pub const PANE_ROWS: usize = 25;
pub const HEADER_SIZE: f32 = 18.0;
pub const BODY_SIZE: f32 = 16.0;
