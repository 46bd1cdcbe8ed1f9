pub mod keyboard;
pub mod pointer;

pub use keyboard::*;
pub use pointer::*;
