//! Platform glue: logging, session persistence, and the console driver.
mod console;
mod logging;
mod persistence;

pub use console::run_app;
