//! Form rendering module
//!
//! - `field_renderer`: per-kind field widgets
//! - `signup_form`: the registration form

mod field_renderer;
mod signup_form;

pub use signup_form::draw_signup;
