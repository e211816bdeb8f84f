//! Input adapters for the fractal viewer.
//!
//! These receive input from the command line or a window and translate it
//! into viewer intents and render requests.

pub mod cli;
pub mod gesture;
#[cfg(feature = "gui")]
pub mod gui;
