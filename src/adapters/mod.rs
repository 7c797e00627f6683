pub mod api_handler;
pub mod export_sink;
pub mod health_handler;
pub mod ui_handler;
