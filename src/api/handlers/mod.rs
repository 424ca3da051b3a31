//! HTTP handlers.

mod ideas;
mod system;


pub use ideas::*;
pub use system::*;
