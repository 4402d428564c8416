//! Browser frontend for the calculator.
//!
//! The mock DOM keeps the full wiring testable without a browser; the
//! wasm-bindgen bindings (feature `wasm`) expose the same surface to a real
//! page.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;
mod shell;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom};
pub use driver::DomDriver;
pub use keypad::{key_to_action, DomKeypad, KeypadAction, KeypadButtonDef};
pub use shell::DomShell;
