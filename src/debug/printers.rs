// src/debug/printers.rs

//! Printer macros for errors and warnings, and helpers for debug builds.
//!
//! STDOUT belongs to the JSON messages; everything here writes to STDERR.

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `d`ebug `e`println! an `err`or
#[macro_export]
macro_rules! de_err {
    (
        $($args:tt)*
    ) => {
        {
            #[cfg(any(debug_assertions,test))]
            eprint!("ERROR: ");
            #[cfg(any(debug_assertions,test))]
            eprintln!($($args)*)
        }
    }
}
pub use de_err;

/// `e`println! an `err`or
#[macro_export]
macro_rules! e_err {
    (
        $($args:tt)*
    ) => {
        {
            eprint!("ERROR: ");
            eprintln!($($args)*)
        }
    }
}
pub use e_err;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// helper functions for debug printing of raw log lines
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Replace a C0 control character or DEL with the matching glyph from the
/// Unicode "Control Pictures" block, e.g. `'\n'` becomes `'␊'`.
/// Other characters are returned unchanged.
///
/// Keeps the printed width of a control character at 1, unlike
/// `fmt::Debug` escapes.
///
/// only intended to aid visual debugging
#[cfg(any(debug_assertions, test))]
pub fn char_to_char_noraw(c: char) -> char {
    match c as u32 {
        val @ 0..=31 => char::from_u32(0x2400 + val).unwrap_or(c),
        127 => '␡',
        _ => c,
    }
}

/// transform a `str` to a `String` with control characters made visible.
///
/// only intended for debugging
#[doc(hidden)]
#[allow(non_snake_case)]
#[cfg(any(debug_assertions, test))]
pub fn str_to_String_noraw(str_buf: &str) -> String {
    str_buf
        .chars()
        .map(char_to_char_noraw)
        .collect()
}
