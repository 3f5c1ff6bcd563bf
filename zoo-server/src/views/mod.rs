//! HTML fragments
//!
//! One builder per fragment kind. Built with `maud`, so any text taken from
//! the database is escaped on interpolation.

mod pages;
mod records;

pub use pages::{not_found, server_error, welcome};
pub use records::{animal, enclosure, zookeeper};
