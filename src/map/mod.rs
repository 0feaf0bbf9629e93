//! This module defines the game map and the queries the navigation core makes against it.

pub mod builder;
pub mod direction;
pub mod oracle;
pub mod parser;
pub mod position;
