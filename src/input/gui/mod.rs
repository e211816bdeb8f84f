//! Windowed front end: winit for the window and events, pixels for the
//! framebuffer and egui for the control panel.

pub mod app;
pub mod commands;
pub mod events;
