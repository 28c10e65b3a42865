// src/bin/cwfilter.rs

//! Driver program _cwfilter_ drives the [_cwlib_].
//!
//! Processes user-passed command-line arguments, then calls
//! [`run_pipeline`] for the passed path.
//!
//! The main thread walks the path for gzipped CloudWatch log exports and
//! sends each parsed [`Entry`] to one JSON filtering thread. The JSON
//! filtering thread is the only thread that writes to STDOUT.
//!
//! The first error of any file stops the program with an error message
//! and exit code `1`.
//!
//! If passed CLI option `--summary`, statistics about the run are printed
//! to STDERR.
//!
//! [_cwlib_]: cwlib
//! [`run_pipeline`]: cwlib::pipeline::run_pipeline
//! [`Entry`]: cwlib::data::entry::Entry

#![allow(non_camel_case_types)]

use std::io::{BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

use ::clap::Parser;
use ::const_format::concatcp;

use ::cwlib::common::{FPath, CHANNEL_CAPACITY, SUFFIX_GZ};
use ::cwlib::debug::printers::e_err;
use ::cwlib::pipeline::{run_pipeline, PipelineConfig, PipelineSummary};
use ::cwlib::printer::summary::print_summary;
use ::si_trace_print::stack::stack_offset_set;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// --------------------
// command-line parsing

#[cfg(debug_assertions)]
const CLI_HELP_AFTER_NOTE_DEBUG: &str = "\nDEBUG BUILD";
#[cfg(not(debug_assertions))]
const CLI_HELP_AFTER_NOTE_DEBUG: &str = "";

/// `--help` _afterword_ message.
const CLI_HELP_AFTER: &str = concatcp!(
    "\
Given a directory path, the directory is walked recursively. Files with
names ending \"", SUFFIX_GZ, "\" are decompressed and read. Other files are skipped.

Each line is expected to be a CloudWatch log export line, a 24 character
RFC 3339 datetime, one separator, and the log message, e.g.

    2018-03-29T14:40:23.417Z {\"src\":\"rl\",\"status\":200}

Log messages that are JSON are printed, one per line. Other lines are skipped.

Any file that fails to decompress or read stops the program.

---

Version: ", env!("CARGO_PKG_VERSION"), "
MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "
License: ", env!("CARGO_PKG_LICENSE"), "
Author: ", env!("CARGO_PKG_AUTHORS"), "
",
    CLI_HELP_AFTER_NOTE_DEBUG,
);

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "cwfilter",
    // write expanded information for the `--version` output
    version = concatcp!(
        "\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Author: ", env!("CARGO_PKG_AUTHORS"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// The path to gzipped CloudWatch data (default format of data
    /// exported to S3). Directories will be recursed.
    #[clap(
        short = 'p',
        long,
        verbatim_doc_comment,
    )]
    path: FPath,

    /// Count of log entries to hold between the file reader and the
    /// JSON filter.
    #[clap(
        long,
        verbatim_doc_comment,
        value_parser = cli_parse_channel_capacity,
        default_value_t = CHANNEL_CAPACITY,
    )]
    channel_capacity: usize,

    /// Print a summary of files and entries processed to STDERR.
    #[clap(
        short = 's',
        long,
        verbatim_doc_comment,
    )]
    summary: bool,
}

/// `clap` argument validator for `--channel-capacity`.
fn cli_parse_channel_capacity(value: &str) -> anyhow::Result<usize> {
    let capacity: usize = match value.parse::<usize>() {
        Ok(val) => val,
        Err(err) => {
            return Err(anyhow::anyhow!("Unable to parse a number from {:?}; {}", value, err));
        }
    };
    if capacity == 0 {
        anyhow::bail!("--channel-capacity must be greater than 0");
    }

    Ok(capacity)
}

/// Process the user-passed command-line arguments.
fn cli_process_args() -> (PipelineConfig, bool) {
    let args = CLI_Args::parse();
    defo!("args {:?}", args);

    let config = PipelineConfig {
        path: args.path,
        channel_capacity: args.channel_capacity,
    };

    (config, args.summary)
}

/// Process the user-passed command-line arguments.
/// Run the pipeline.
/// Determine a process return code.
pub fn main() -> ExitCode {
    let start_time = Instant::now();
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let (config, cli_opt_summary) = cli_process_args();

    // `Stdout` is locked per write; the filtering thread is the only writer
    let writer = BufWriter::new(std::io::stdout());
    let summary: PipelineSummary = run_pipeline(&config, writer);
    // the filter thread flushed its writer; make sure nothing is left behind
    // before STDERR is written
    _ = std::io::stdout().flush();

    if cli_opt_summary {
        print_summary(&summary.read_stats, summary.filter_stats.as_ref(), start_time.elapsed());
    }

    let exitcode: ExitCode = match summary.error {
        Some(err) => {
            e_err!("{}", err);
            ExitCode::FAILURE
        }
        None => ExitCode::SUCCESS,
    };
    defx!("exitcode {:?}", exitcode);

    exitcode
}
