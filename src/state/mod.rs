//! Application state module

mod app_state;
mod forms;
mod reference;
mod submission;
mod validation;

pub use app_state::*;
pub use forms::*;
pub use reference::*;
pub use submission::*;
pub use validation::*;
