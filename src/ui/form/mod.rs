//! Form fields and the state that ties them to a form.
//!
//! Every field owns a [`FieldState`] created through [`setup_field`]. When
//! the field is rendered inside a [`Form`], the state registers itself with
//! the form's [`FormContext`], which can then read, validate, reset or
//! disable all of its fields at once.
//!
//! ```
//! use quarry_ui::ui::form::{FieldValue, InputMask, Validator, run_validators};
//!
//! let zip = InputMask::pattern("99999-999");
//! assert_eq!(zip.apply("01310100"), "01310-100");
//!
//! let even = Validator::new("even", |value: &FieldValue| {
//!     (value.as_text().len() % 2 != 0).then(|| "Must have an even length".to_string())
//! });
//! assert!(run_validators(&[even], &FieldValue::from("ab")).is_empty());
//! ```

mod context;
mod input;
mod mask;
mod select;
mod state;
mod text_area;
mod validators;
mod value;
mod wrapper;

pub use context::{Form, FormContext, use_form};
pub use input::TextField;
pub use mask::InputMask;
pub use select::{Select, SelectOption};
pub use state::{FieldOptions, FieldState, setup_field};
pub use text_area::{ResizeDirection, TextArea};
pub use validators::{
    Validator, email, max_length, min_length, numeric, required, run_validators,
};
pub use value::FieldValue;
pub use wrapper::{FieldInternalWrapper, InputContainer};
