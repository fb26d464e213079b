//! Windowed front end: winit for the window and events, the GPU presenter for
//! drawing, egui for the diagnostics overlay.

pub mod app;
pub mod commands;
pub mod overlay;
pub mod translate;
