//! Command Module
//!
//! Requests a caller (the CLI) sends to the catalog, and the responses it
//! renders.
//!
//! ### Commands
//! - Add, CheckOut, CheckIn, Update, Remove, Search: keyed by ISBN
//! - List, History: full-catalog and transaction listings
//!
//! ### Status Codes
//! - Ok
//! - NotFound
//! - InvalidState
//! - Error

mod command;
mod menu;
mod response;

pub use command::Command;
pub use menu::{optional_input, MenuChoice};
pub use response::{Response, Status};
