//! Output sinks

pub mod console;
pub mod memory;

pub use console::ConsoleAppender;
pub use memory::{MemoryAppender, MemoryBuffer};
