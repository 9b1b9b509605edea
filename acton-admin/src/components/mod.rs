//! Page descriptions handed to the renderer
//!
//! Resources do not render HTML. They assemble these serializable
//! descriptions (a table, or a card wrapping a form) and return them as
//! JSON; the admin frontend turns them into pages.

mod action;
mod card;
mod form;
mod page;
mod table;

pub use action::Action;
pub use card::Card;
pub use form::Form;
pub use page::{Component, Page};
pub use table::{Column, FilterItem, Pagination, Table, ToolBar};
