//! Terminal front end: feeds input through the core state machine and prints each new frame.
mod app;
mod effects;
mod render;

pub use app::run_app;
