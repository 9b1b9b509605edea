//! Form field builders
//!
//! Every builder starts from `new(name)` or `labeled(name, label)` and
//! converts into a [`Field`](super::Field) with `.into()`.

mod datetime;
mod icon;
mod search;
mod text;

pub use datetime::Datetime;
pub use icon::Icon;
pub use search::Search;
pub use text::{Select, Text, Textarea};
