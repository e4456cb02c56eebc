//! Page components for Velocis.

mod landing;

pub use landing::Landing;
