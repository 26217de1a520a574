//! Human-readable formatting for upload sizes.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Default decimal places used by the upload preview.
pub const DEFAULT_DECIMALS: usize = 2;

/// Format a byte count using binary (1024) prefixes.
///
/// The unit is picked from `floor(log1024(bytes))`, clamped to gigabytes.
/// The scaled value is rounded to `decimals` places and trailing zeros are
/// dropped, so `1536` renders as `"1.5 KB"` rather than `"1.50 KB"`.
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    let bucket = (bytes.ilog(1024) as usize).min(UNITS.len() - 1);
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let scaled = bytes as f64 / 1024_f64.powi(bucket as i32);
    format!("{} {}", trim_fixed(scaled, decimals), UNITS[bucket])
}

/// Round `value` to `decimals` places with ties going away from zero.
///
/// `{:.N}` formatting rounds exact ties to even (`1.125` prints as `1.12`);
/// dashboard figures round them up instead.
pub fn round_half_up(value: f64, decimals: usize) -> f64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round to `decimals` places, then print without trailing zeros.
fn trim_fixed(value: f64, decimals: usize) -> String {
    let rounded = round_half_up(value, decimals);
    let fixed = format!("{rounded:.decimals$}");
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
}
