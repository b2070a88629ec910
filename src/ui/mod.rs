pub mod panel;

pub use panel::{build_panel, format_duration, toggle_message, PanelRow, PanelView};
