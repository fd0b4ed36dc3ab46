//! Browser Bindings
//!
//! Thin wrappers over the `window` APIs the pages use.

mod storage;
mod dialog;
mod download;

pub use storage::BrowserStorage;
pub use dialog::{alert, confirm};
pub use download::{download_bytes, read_file};
