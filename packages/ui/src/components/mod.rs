//! Small form primitives shared by every screen.

mod button;
mod field;
mod spinner;

pub use button::{Button, ButtonVariant};
pub use field::{CheckboxField, Input, Label, SelectField, SelectOption, TextAreaField, TextField};
pub use spinner::Spinner;
