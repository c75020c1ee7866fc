//! Terminal front-end
//!
//! One responsive layout over the change calculator: the keypad feeds digit
//! and clear events into the amount buffer, and every change re-renders a
//! freshly computed breakdown.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::VangtiChaiApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonAction, Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render, Orientation};
