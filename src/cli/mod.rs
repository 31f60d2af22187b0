//! Command-line front end for the `gwalk` binary.

pub mod commands;
