use super::*;

fn assert_hsl(actual: Hsl, h: f64, s: f64, l: f64) {
    assert!((actual.h - h).abs() < 0.01, "hue {} != {h}", actual.h);
    assert!((actual.s - s).abs() < 0.01, "saturation {} != {s}", actual.s);
    assert!((actual.l - l).abs() < 0.01, "lightness {} != {l}", actual.l);
}

// =============================================================
// hex_to_hsl
// =============================================================

#[test]
fn hex_to_hsl_primary_colors() {
    assert_hsl(hex_to_hsl("#ff0000"), 0.0, 100.0, 50.0);
    assert_hsl(hex_to_hsl("#00ff00"), 120.0, 100.0, 50.0);
    assert_hsl(hex_to_hsl("#0000ff"), 240.0, 100.0, 50.0);
}

#[test]
fn hex_to_hsl_default_accent() {
    assert_hsl(hex_to_hsl(DEFAULT_ACCENT), 216.0, 100.0, 50.0);
}

#[test]
fn hex_to_hsl_achromatic_has_zero_hue_and_saturation() {
    assert_hsl(hex_to_hsl("#ffffff"), 0.0, 0.0, 100.0);
    assert_hsl(hex_to_hsl("#000000"), 0.0, 0.0, 0.0);
    let gray = hex_to_hsl("#808080");
    assert_eq!(gray.s, 0.0);
    assert!((gray.l - 50.2).abs() < 0.1);
}

#[test]
fn hex_to_hsl_magenta_wraps_hue_below_360() {
    // max channel red with g < b takes the +6 branch.
    assert_hsl(hex_to_hsl("#ff00ff"), 300.0, 100.0, 50.0);
}

#[test]
fn hex_to_hsl_accepts_uppercase() {
    assert_eq!(hex_to_hsl("#FF0000"), hex_to_hsl("#ff0000"));
}

#[test]
fn hex_to_hsl_malformed_input_uses_fallback() {
    for raw in ["", "#", "0066ff", "#0066f", "#0066ffa", "#gg0000", "#+f0000", "#06f", " #0066ff", "red"] {
        assert_eq!(hex_to_hsl(raw), FALLBACK_HSL, "input {raw:?}");
    }
    assert_eq!(FALLBACK_HSL, Hsl { h: 240.0, s: 100.0, l: 50.0 });
}

// =============================================================
// hsl_to_hex
// =============================================================

#[test]
fn hsl_to_hex_known_values() {
    assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
    assert_eq!(hsl_to_hex(216.0, 100.0, 50.0), "#0066ff");
    assert_eq!(hsl_to_hex(120.0, 100.0, 25.0), "#008000");
}

#[test]
fn hsl_to_hex_rounds_instead_of_truncating() {
    // 0.5 * 255 = 127.5 must round up to 0x80.
    assert_eq!(hsl_to_hex(0.0, 0.0, 50.0), "#808080");
}

#[test]
fn hsl_to_hex_wraps_hue_and_clamps_percentages() {
    assert_eq!(hsl_to_hex(360.0, 100.0, 50.0), "#ff0000");
    assert_eq!(hsl_to_hex(-120.0, 100.0, 50.0), hsl_to_hex(240.0, 100.0, 50.0));
    assert_eq!(hsl_to_hex(0.0, 150.0, 120.0), "#ffffff");
}

#[test]
fn hsl_round_trip_stays_within_one_per_channel() {
    let mut checked = 0;
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(15) {
            for b in (0..=255u8).step_by(15) {
                let original = Rgb { r, g, b };
                let hsl = hex_to_hsl(&original.to_hex());
                let back = parse_hex_rgb(&hsl_to_hex(hsl.h, hsl.s, hsl.l)).unwrap();
                for (a, z) in [(original.r, back.r), (original.g, back.g), (original.b, back.b)] {
                    assert!(a.abs_diff(z) <= 1, "{} -> {hsl:?} -> {}", original.to_hex(), back.to_hex());
                }
                checked += 1;
            }
        }
    }
    assert_eq!(checked, 18 * 18 * 18);
}

// =============================================================
// Hsl::css_components
// =============================================================

#[test]
fn css_components_round_to_whole_units() {
    let (h, s, l) = hex_to_hsl(DEFAULT_ACCENT).css_components();
    assert_eq!(h, "216");
    assert_eq!(s, "100%");
    assert_eq!(l, "50%");

    let (h, s, l) = Hsl { h: 12.6, s: 33.4, l: 70.5 }.css_components();
    assert_eq!((h.as_str(), s.as_str(), l.as_str()), ("13", "33%", "71%"));
}

// =============================================================
// AccentColor
// =============================================================

#[test]
fn accent_default_is_blue() {
    assert_eq!(AccentColor::default().as_str(), "#0066ff");
}

#[test]
fn accent_parse_canonicalizes_to_lowercase() {
    let color = AccentColor::parse("#A1B2C3").unwrap();
    assert_eq!(color.as_str(), "#a1b2c3");
    assert_eq!(color.to_string(), "#a1b2c3");
}

#[test]
fn accent_parse_rejects_invalid_input() {
    assert_eq!(
        AccentColor::parse("not-a-color"),
        Err(ThemeError::InvalidColor("not-a-color".to_owned()))
    );
    assert!("#12345".parse::<AccentColor>().is_err());
}

#[test]
fn accent_serializes_as_plain_string() {
    let color = AccentColor::parse("#10b981").unwrap();
    assert_eq!(serde_json::to_string(&color).unwrap(), "\"#10b981\"");
    let back: AccentColor = serde_json::from_str("\"#EF4444\"").unwrap();
    assert_eq!(back.as_str(), "#ef4444");
    assert!(serde_json::from_str::<AccentColor>("\"blue\"").is_err());
}

#[test]
fn preset_accents_are_valid_and_distinct() {
    for (label, hex) in PRESET_ACCENTS {
        let color = AccentColor::parse(hex).unwrap();
        assert_eq!(color.as_str(), hex, "{label} is not canonical");
    }
    assert_eq!(PRESET_ACCENTS[0].1, DEFAULT_ACCENT);
    for (i, a) in PRESET_ACCENTS.iter().enumerate() {
        for b in &PRESET_ACCENTS[i + 1..] {
            assert_ne!(a.1, b.1);
        }
    }
}

// =============================================================
// HexDraft
// =============================================================

#[test]
fn draft_adds_missing_hash() {
    let draft = HexDraft::from_input("0066ff");
    assert_eq!(draft.text, "#0066ff");
    assert_eq!(draft.color, Some(AccentColor::default()));
}

#[test]
fn draft_expands_shorthand() {
    let draft = HexDraft::from_input("#0Af");
    assert_eq!(draft.text, "#0Af");
    assert_eq!(draft.color.unwrap().as_str(), "#00aaff");
}

#[test]
fn draft_keeps_partial_input_uncommitted() {
    for raw in ["#00", "#00ff", "#00ff0", "#zzzzzz", "#"] {
        let draft = HexDraft::from_input(raw);
        assert_eq!(draft.text, raw);
        assert_eq!(draft.color, None, "input {raw:?}");
    }
}

#[test]
fn draft_empty_input_stays_empty() {
    assert_eq!(HexDraft::from_input("   "), HexDraft { text: String::new(), color: None });
}

#[test]
fn draft_trims_whitespace() {
    let draft = HexDraft::from_input("  #ABCDEF ");
    assert_eq!(draft.text, "#ABCDEF");
    assert_eq!(draft.color.unwrap().as_str(), "#abcdef");
}
