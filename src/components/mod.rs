//! Sections of the Velocis landing page.

mod contact_form;
mod footer;
mod hero;
mod services;

pub use contact_form::{ContactForm, ContactSection};
pub use footer::Footer;
pub use hero::Hero;
pub use services::{ServiceCard, Services};
