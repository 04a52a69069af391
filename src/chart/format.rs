/// Maximum decimals shown for a chart value.
pub const MAX_DECIMALS: usize = 4;

/// Format a chart value for axis ticks, tooltips and tables.
///
/// The value is first rounded at 1e-10 so representation noise (`15.199999999999999`) collapses.
/// At most [`MAX_DECIMALS`] decimals are kept (truncated, not rounded); the decimals are cut
/// before the first run of three zeros, and trailing zeros are dropped. Non-finite input formats
/// as an empty string.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let rounded = (value * 1e10).round() / 1e10;
    let text = format!("{rounded:.10}");
    let Some((int_part, dec_part)) = text.split_once('.') else {
        return text;
    };

    let working = &dec_part[..dec_part.len().min(MAX_DECIMALS)];
    let mut cut = working.len();
    let mut zeros = 0;
    for (i, b) in working.bytes().enumerate() {
        if b == b'0' {
            zeros += 1;
            if zeros >= 3 {
                cut = i + 1 - zeros;
                break;
            }
        } else {
            zeros = 0;
        }
    }

    let kept = working[..cut].trim_end_matches('0');
    if kept.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{kept}")
    }
}
