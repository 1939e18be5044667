pub mod api;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod logging;
pub mod ui;
