use super::*;

#[test]
fn zero_is_special_cased() {
    assert_eq!(format_bytes(0, DEFAULT_DECIMALS), "0 Bytes");
}

#[test]
fn small_counts_stay_in_bytes() {
    assert_eq!(format_bytes(1, DEFAULT_DECIMALS), "1 Bytes");
    assert_eq!(format_bytes(1023, DEFAULT_DECIMALS), "1023 Bytes");
}

#[test]
fn exact_powers_drop_fraction() {
    assert_eq!(format_bytes(1024, DEFAULT_DECIMALS), "1 KB");
    assert_eq!(format_bytes(1_048_576, DEFAULT_DECIMALS), "1 MB");
    assert_eq!(format_bytes(1_073_741_824, DEFAULT_DECIMALS), "1 GB");
}

#[test]
fn fractional_values_trim_trailing_zeros() {
    assert_eq!(format_bytes(1536, DEFAULT_DECIMALS), "1.5 KB");
    assert_eq!(format_bytes(1_572_864, DEFAULT_DECIMALS), "1.5 MB");
}

#[test]
fn rounds_to_requested_decimals() {
    // 1234 / 1024 = 1.205078...
    assert_eq!(format_bytes(1234, 2), "1.21 KB");
    assert_eq!(format_bytes(1234, 1), "1.2 KB");
    assert_eq!(format_bytes(1234, 0), "1 KB");
}

#[test]
fn terabytes_clamp_to_gigabytes() {
    assert_eq!(format_bytes(1_099_511_627_776, DEFAULT_DECIMALS), "1024 GB");
}

#[test]
fn exact_ties_round_up() {
    // 1152 / 1024 = 1.125, 1664 / 1024 = 1.625, 2176 / 1024 = 2.125
    assert_eq!(format_bytes(1152, 2), "1.13 KB");
    assert_eq!(format_bytes(1664, 2), "1.63 KB");
    assert_eq!(format_bytes(2176, 2), "2.13 KB");
    assert_eq!(format_bytes(1536, 0), "2 KB");
}

#[test]
fn round_half_up_moves_ties_away_from_zero() {
    assert!((round_half_up(12.25, 1) - 12.3).abs() < 1e-9);
    assert!((round_half_up(0.5, 0) - 1.0).abs() < f64::EPSILON);
    assert!((round_half_up(7.24, 1) - 7.2).abs() < 1e-9);
}
