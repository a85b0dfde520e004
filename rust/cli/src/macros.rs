//! Macros for common CLI error handling patterns.

/// Write to a stream and exit with error code if writing fails.
///
/// # Examples
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

/// Parse a JSON line or skip to the next iteration on error.
///
/// The failure is reported as a warning naming `$context`, and `$skipped`
/// is incremented.
///
/// # Examples
///
/// ```ignore
/// let record: GameRecord = parse_json_or_continue!(line, err, format!("line {}", n), skipped);
/// ```
#[macro_export]
macro_rules! parse_json_or_continue {
    ($line:expr, $err:expr, $context:expr, $skipped:ident) => {
        match serde_json::from_str($line) {
            Ok(r) => r,
            Err(e) => {
                $skipped += 1;
                let _ = $crate::ui::display_warning(
                    $err,
                    &format!("skipping {}: {}", $context, e),
                );
                continue;
            }
        }
    };
}
