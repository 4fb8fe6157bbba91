//! Form components for `markupui`.
//!
//! - element factories for single controls ([`text_input`], [`checkbox`],
//!   [`textarea`], [`button`], ...),
//! - [`Select`] with option groups and multi-selection,
//! - [`CheckboxGroup`] and [`RadioGroup`],
//! - [`Field`] rows pairing a label with a control,
//! - the [`Form`] builder with CSRF nonces.
//!
//! # Example
//!
//! ```rust
//! use markupui_core::{Environment, HasAttributes, Render};
//! use markupui_form::{Form, field, text_input};
//!
//! let env = Environment::new();
//! let markup = Form::new(&env, "options.php")
//!     .nonce("general-options")
//!     .field(field(&env, "Site title", "blogname", text_input("blogname", "").id("blogname")))
//!     .render();
//! assert!(markup.starts_with("<form"));
//! ```

pub mod choice;
pub use choice::{CheckboxGroup, ChoiceKind, RadioGroup, checkbox_group, radio_group};
pub mod field;
pub use field::{Field, field};
pub mod form;
pub use form::{Form, Method, nonce_field};
pub mod input;
pub use input::{
    ButtonKind, button, checkbox, email_input, hidden, input, label, number_input, password,
    submit, text_input, textarea,
};
pub mod select;
pub use select::{Select, SelectItem, SelectOption, select};

mod style;
