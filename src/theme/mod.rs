//! Visual theme for the Velocis landing page.

mod styles;

pub use styles::GLOBAL_STYLES;
