//! # chime-shared
//!
//! Domain types shared by every Chime crate: the strict entities the rest of
//! the application consumes and the closed enumerations they carry.

pub mod constants;
pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
