//! Index grid configuration
//!
//! Currently the search bar; see [`search::SearchItem`].

pub mod search;
