//! Browser Bindings
//!
//! Wrappers around the browser APIs the app talks to.

mod storage;
mod dialog;

pub use storage::*;
pub use dialog::*;
