pub mod backend_selector;
pub mod export_panel;
pub mod field_editor;
pub mod preview;
