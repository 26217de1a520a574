use super::*;

// =============================================================
// Theme state machine
// =============================================================

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn storage_values_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("solarized"), None);
}

#[test]
fn from_attr_treats_anything_but_dark_as_light() {
    assert_eq!(Theme::from_attr(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_attr(Some("light")), Theme::Light);
    assert_eq!(Theme::from_attr(Some("auto")), Theme::Light);
    assert_eq!(Theme::from_attr(None), Theme::Light);
}

#[test]
fn icon_tracks_theme() {
    assert_eq!(Theme::Dark.icon_class(), "fas fa-moon");
    assert_eq!(Theme::Light.icon_class(), "fas fa-sun");
}

// =============================================================
// Browser helpers (native no-ops)
// =============================================================

#[test]
fn toggle_returns_flipped_theme() {
    assert_eq!(toggle(Theme::Light, "devilcloud-theme"), Theme::Dark);
    assert_eq!(toggle(Theme::Dark, "devilcloud-theme"), Theme::Light);
}

#[cfg(not(feature = "csr"))]
#[test]
fn storage_reads_are_empty_natively() {
    assert_eq!(read_saved("devilcloud-theme"), None);
    assert_eq!(restore("devilcloud-theme"), None);
    assert_eq!(current(), Theme::Light);
}
