pub mod config;
pub mod core;
pub mod models;

pub use config::Config;
pub use core::{AppError, Intent, MainView, ScreenProps, Session, View, ViewController};

#[cfg(feature = "gui")]
pub mod gui;
