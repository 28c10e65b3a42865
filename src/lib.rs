// src/lib.rs

//! _cwlib_ is the library used by the _cwfilter_ binary program.
//!
//! _cwfilter_ reads a tree of gzipped CloudWatch log exports (the default
//! format of CloudWatch Logs exported to S3), parses each line into a
//! timestamped [`Entry`], and prints only the messages that are JSON.
//!
//! ```text
//! 2018-03-29T14:40:23.417Z {"time":"2018-03-29T14:40:23Z","status":200}
//! 2018-03-29T14:40:24.417Z START RequestId: 8d1e6a5c Version: $LATEST
//! ```
//!
//! prints
//!
//! ```text
//! {"time":"2018-03-29T14:40:23Z","status":200}
//! ```
//!
//! See [`run_pipeline`] for how the parts fit together.
//!
//! [`Entry`]: crate::data::entry::Entry
//! [`run_pipeline`]: crate::pipeline::run_pipeline

pub mod common;
pub mod data;
pub mod debug;
pub mod pipeline;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
