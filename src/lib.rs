pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod document;
pub mod logging;
pub mod ui;
pub mod utils;
