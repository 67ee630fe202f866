//! Grouped statistics over the passenger table.
//!
//! Every function here takes the table by shared reference and builds
//! fresh rows. Output row types live in [`types`].

pub mod demographic;
pub mod family;
pub mod report;
pub mod surname;
pub mod survival;
pub mod types;
pub mod utility;

#[cfg(test)]
pub(crate) mod fixtures;
