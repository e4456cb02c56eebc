//! Reusable UI components
//!
//! Class names map onto the stylesheet embedded by the desktop binary.

mod button;
mod input;
mod status_banner;

pub use button::*;
pub use input::*;
pub use status_banner::*;
