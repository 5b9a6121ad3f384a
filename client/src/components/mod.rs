pub mod canvas_host;
pub mod examples_panel;
pub mod fields;
pub mod general_panel;
pub mod preset_panel;
pub mod share_bar;
pub mod side_panel;
pub mod tabs;
pub mod toast;
