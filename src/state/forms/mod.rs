//! Form domain layer
//!
//! Field descriptors and the immutable signup form snapshot.

mod field;
mod form_state;

pub use field::{FieldKind, FieldName, OptionSource};
pub use form_state::{FieldUpdate, FormFocus, FormState};
