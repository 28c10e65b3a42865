// src/tests/summary_tests.rs

//! tests for `readers/summary.rs` and `printer/summary.rs`

use crate::printer::summary::write_summary;
use crate::readers::summary::{FilterStats, ReadStats};
use crate::tests::common::{dt_a1, dt_utc};

use std::time::Duration;

#[test]
fn test_readstats_add_file() {
    let mut stats = ReadStats::default();
    stats.files_visited = 3;
    stats.add_file(10, 7);
    stats.add_file(0, 0);
    stats.add_file(5, 5);
    assert_eq!(
        stats,
        ReadStats {
            files_visited: 3,
            files_read: 3,
            lines_read: 15,
            entries_extracted: 12,
        }
    );
}

#[test]
fn test_readstats_display() {
    let mut stats = ReadStats::default();
    stats.files_visited = 2;
    stats.add_file(4, 3);
    assert_eq!(
        stats.to_string(),
        "files visited 2, files read 1, lines read 4, entries extracted 3"
    );
}

#[test]
fn test_filterstats_printed() {
    let mut stats = FilterStats::default();
    assert_eq!(stats.dt_first, None);
    let dt_b = dt_utc(2018, 3, 28, 1, 2, 3, 0);
    let dt_c = dt_utc(2019, 1, 1, 0, 0, 0, 0);
    stats.received();
    stats.received();
    stats.printed(&dt_a1());
    stats.received();
    stats.printed(&dt_b);
    stats.received();
    stats.printed(&dt_c);
    assert_eq!(stats.entries_received, 4);
    assert_eq!(stats.entries_printed, 3);
    // order of printing, not earliest and latest
    assert_eq!(stats.dt_first, Some(dt_a1()));
    assert_eq!(stats.dt_last, Some(dt_c));
    assert_eq!(stats.to_string(), "entries received 4, entries printed 3");
}

#[test]
fn test_write_summary() {
    let mut read_stats = ReadStats::default();
    read_stats.files_visited = 4;
    read_stats.add_file(20, 18);
    let mut filter_stats = FilterStats::default();
    for _ in 0..18 {
        filter_stats.received();
    }
    filter_stats.printed(&dt_a1());
    let mut buffer = Vec::<u8>::new();
    write_summary(&mut buffer, &read_stats, Some(&filter_stats), Duration::from_millis(1500)).unwrap();
    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("Paths visited          : 4\n"), "{}", output);
    assert!(output.contains("Files read             : 1\n"), "{}", output);
    assert!(output.contains("Lines read             : 20\n"), "{}", output);
    assert!(output.contains("Entries extracted      : 18\n"), "{}", output);
    assert!(output.contains("Entries filtered       : 18\n"), "{}", output);
    assert!(output.contains("Entries printed        : 1\n"), "{}", output);
    assert!(output.contains("Datetime printed first : 2018-03-29 14:40:23.417 +00:00\n"), "{}", output);
    assert!(output.contains("Datetime printed last  : 2018-03-29 14:40:23.417 +00:00\n"), "{}", output);
    assert!(output.contains("Program run time       : 1.500 seconds\n"), "{}", output);
}

#[test]
fn test_write_summary_no_filter_stats() {
    let read_stats = ReadStats::default();
    let mut buffer = Vec::<u8>::new();
    write_summary(&mut buffer, &read_stats, None, Duration::from_secs(0)).unwrap();
    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("Paths visited          : 0\n"), "{}", output);
    assert!(output.contains("Entries printed        :\n"), "{}", output);
    assert!(!output.contains("Datetime printed first"), "{}", output);
}
