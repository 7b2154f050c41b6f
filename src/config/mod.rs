// This module re-exports important pieces for convenience,
// so we can "use crate::config::*" easily.
pub mod gate;
pub mod logging;
pub mod types;

pub use gate::*;
pub use logging::*;
pub use types::*;
