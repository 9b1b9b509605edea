//! Form fields
//!
//! Builders for the inputs a resource places on its creation and update
//! forms, plus the rules used to validate what gets submitted.
//!
//! # Examples
//!
//! ```rust
//! use acton_admin::forms::{Datetime, Field, Icon, Rule, Search, Text};
//!
//! let fields: Vec<Field> = vec![
//!     Text::labeled("title", "Title").rules([Rule::Required]).into(),
//!     Icon::labeled("icon", "Icon").full_width().into(),
//!     Search::labeled("status", "Status")
//!         .options([(1, "Enabled"), (0, "Disabled")])
//!         .into(),
//!     Datetime::labeled("created_at", "Created").hide_when_creating().into(),
//! ];
//! assert_eq!(fields[1].component(), "icon");
//! ```

pub mod field;
pub mod fields;
pub mod icons;
pub mod item;
pub mod validation;

pub use field::{Field, FieldKind};
pub use fields::{Datetime, Icon, Search, Select, Text, Textarea};
pub use item::{options_from, resolve_label, FieldContext, FormItem, SelectOption, Visibility};
pub use validation::{validate, FieldError, Rule, ValidationErrors};
