//! File formats used by the command-line tool.

mod scene;

pub use scene::{CursorPick, Scene};
