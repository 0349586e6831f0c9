//! Keyboard input adapter

pub mod handler;

pub use handler::{InputHandler, KeyAction};
