//! Clock-string formatting for raw second counts.

/// Render an optional elapsed-seconds value for display.
///
/// Absent and zero values render as the empty string. Values of an hour or
/// more render as `HH:MM:SS`, shorter values as `MM:SS`, every segment
/// zero-padded to width 2.
pub fn format_time(seconds: Option<u32>) -> String {
    let total = match seconds {
        Some(s) if s > 0 => s,
        _ => return String::new(),
    };

    let hrs = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hrs > 0 {
        format!("{hrs:02}:{mins:02}:{secs:02}")
    } else {
        format!("{mins:02}:{secs:02}")
    }
}

/// Floor a raw numeric seconds value into the supported domain.
///
/// Fractional seconds are floored; non-finite, zero, and negative inputs
/// are out of domain and treated as absent.
pub fn seconds_from_raw(raw: f64) -> Option<u32> {
    if !raw.is_finite() || raw < 1.0 || raw >= u32::MAX as f64 {
        return None;
    }
    Some(raw.floor() as u32)
}
