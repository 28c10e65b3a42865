// src/printer/mod.rs

//! The `printer` module is for printing user-facing output: the JSON
//! messages to STDOUT, and the `--summary` to STDERR.

pub mod jsonfilter;
pub mod summary;
