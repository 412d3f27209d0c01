//! Command implementations for OxiJPEG CLI.

pub mod decode;
pub mod idct;
pub mod table;

pub use decode::{DecodeInput, cmd_decode};
pub use idct::cmd_idct;
pub use table::cmd_table;
