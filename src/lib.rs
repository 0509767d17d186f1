pub mod config;
pub mod data;
pub mod event;
pub mod http;
pub mod ui;
pub mod util;
