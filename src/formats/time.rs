/// Format a time offset in seconds as `HH:MM:SS.mmm`.
///
/// Whole seconds are `floor(seconds)` and the remainder is rounded to the
/// nearest millisecond, carrying into the seconds when it reaches 1000.
/// Hours count elapsed time and are never wrapped at 24. Offsets are exact up
/// to `model::MAX_OFFSET_SECS`, which transcripts are validated against.
pub fn format_timestamp(seconds: f64) -> String {
    let value = if seconds.is_finite() {
        seconds.max(0.0)
    } else {
        0.0
    };

    let floor = value.floor();
    let mut whole = floor as u64;
    let mut milli = ((value - floor) * 1000.0).round() as u64;
    if milli >= 1000 {
        whole += 1;
        milli -= 1000;
    }

    let sec = whole % 60;
    let total_minutes = whole / 60;
    let min = total_minutes % 60;
    let hour = total_minutes / 60;

    format!("{hour:02}:{min:02}:{sec:02}.{milli:03}")
}

pub fn format_time_range(start: f64, end: f64) -> String {
    format!("{} --> {}", format_timestamp(start), format_timestamp(end))
}
