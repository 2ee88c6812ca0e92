//! Database schema declaration
//!
//! The scan history table is created at startup but no request path reads or
//! writes it yet.

pub mod init;
pub mod models;

pub use init::*;
pub use models::*;
