//! UI layer tests
//!
//! - Controller tests (selection, clipboard, images, ingredients)
//! - Shell tests (command parsing and end-to-end sessions)
