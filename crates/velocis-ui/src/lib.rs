//! Velocis UI Components
//!
//! Dioxus building blocks for the Velocis landing page: buttons, form
//! inputs (including the hidden honeypot input) and the banner that reports
//! the contact form's submission status.
//!
//! ## Look
//!
//! - **Night (#0b0c10 → #1f2833)**: page gradient
//! - **Panel (#1b1f23)**: cards
//! - **White**: headings and the primary call to action
//! - **Gray (#9ca3af)**: body copy and placeholders

pub mod components;

pub use components::*;
