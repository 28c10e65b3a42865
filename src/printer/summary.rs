// src/printer/summary.rs

//! CLI option `--summary` printing functions.

use crate::data::datetime::DateTimeLOpt;
use crate::debug::printers::de_err;
use crate::readers::summary::{FilterStats, ReadStats};

use std::io::{Result, Write};
use std::time::Duration;

/// Datetime format for printing the summary.
const DATETIMEFMT: &str = "%Y-%m-%d %H:%M:%S%.3f %:z";

fn write_datetime_opt<W: Write>(
    writer: &mut W,
    title: &str,
    dt_opt: &DateTimeLOpt,
) -> Result<()> {
    match dt_opt {
        Some(dt) => writeln!(writer, "{}: {}", title, dt.format(DATETIMEFMT)),
        None => writeln!(writer, "{}:", title),
    }
}

/// Write the summary of a run to `writer`.
pub fn write_summary<W: Write>(
    writer: &mut W,
    read_stats: &ReadStats,
    filter_stats_opt: Option<&FilterStats>,
    run_time: Duration,
) -> Result<()> {
    writeln!(writer, "Program Summary:\n")?;
    writeln!(writer, "Paths visited          : {}", read_stats.files_visited)?;
    writeln!(writer, "Files read             : {}", read_stats.files_read)?;
    writeln!(writer, "Lines read             : {}", read_stats.lines_read)?;
    writeln!(writer, "Entries extracted      : {}", read_stats.entries_extracted)?;
    match filter_stats_opt {
        Some(filter_stats) => {
            writeln!(writer, "Entries filtered       : {}", filter_stats.entries_received)?;
            writeln!(writer, "Entries printed        : {}", filter_stats.entries_printed)?;
            write_datetime_opt(writer, "Datetime printed first ", &filter_stats.dt_first)?;
            write_datetime_opt(writer, "Datetime printed last  ", &filter_stats.dt_last)?;
        }
        None => {
            writeln!(writer, "Entries filtered       :")?;
            writeln!(writer, "Entries printed        :")?;
        }
    }
    writeln!(writer, "Program run time       : {:.3} seconds", run_time.as_secs_f64())?;
    writer.flush()
}

/// Print the summary of a run to STDERR.
pub fn print_summary(
    read_stats: &ReadStats,
    filter_stats_opt: Option<&FilterStats>,
    run_time: Duration,
) {
    let mut stderr_lock = std::io::stderr().lock();
    if let Err(_err) = write_summary(&mut stderr_lock, read_stats, filter_stats_opt, run_time) {
        // nowhere left to report it
        de_err!("write_summary() failed {}", _err);
    }
}
