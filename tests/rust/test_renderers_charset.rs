use super::*;

// ── LineStyle ────────────────────────────────────────────────────────────

#[test]
fn test_style_defaults_to_light() {
    let prefs = LayoutPrefs::default();
    assert_eq!(LineStyle::for_boxes(&prefs), LineStyle::Light);
    assert_eq!(LineStyle::for_edges(&prefs), LineStyle::Light);
}

#[test]
fn test_double_vertices_only_affect_boxes() {
    let prefs = LayoutPrefs {
        double_vertices: true,
        rounded: true,
        ..LayoutPrefs::default()
    };
    assert_eq!(LineStyle::for_boxes(&prefs), LineStyle::Double);
    assert_eq!(LineStyle::for_edges(&prefs), LineStyle::Rounded);
}

#[test]
fn test_ascii_ignores_rounded() {
    let prefs = LayoutPrefs {
        unicode: false,
        rounded: true,
        ..LayoutPrefs::default()
    };
    assert_eq!(LineStyle::for_boxes(&prefs), LineStyle::Ascii);
    assert_eq!(LineStyle::for_edges(&prefs), LineStyle::Ascii);
    assert!(LineStyle::Ascii.is_ascii());
    assert!(!LineStyle::Rounded.is_ascii());

    let double = LayoutPrefs {
        double_vertices: true,
        ..prefs
    };
    assert_eq!(LineStyle::for_boxes(&double), LineStyle::AsciiDouble);
}

// ── BoxChars ─────────────────────────────────────────────────────────────

#[test]
fn test_rounded_changes_only_corners() {
    let r = BoxChars::rounded();
    assert_eq!(r.top_left, '╭');
    assert_eq!(r.bottom_right, '╯');
    assert_eq!(r.horizontal, '─');
    assert_eq!(r.arrow_down, '▼');
}

#[test]
fn test_for_style() {
    assert_eq!(BoxChars::for_style(LineStyle::Double).vertical, '║');
    assert_eq!(BoxChars::for_style(LineStyle::Ascii).vertical, '|');
    assert_eq!(BoxChars::for_style(LineStyle::AsciiDouble).horizontal, '=');
    assert_eq!(BoxChars::for_style(LineStyle::AsciiDouble).arrow_up, '^');
}

#[test]
fn test_tee_per_side() {
    let bc = BoxChars::unicode();
    assert_eq!(bc.tee(Side::Bottom), '┬');
    assert_eq!(bc.tee(Side::Top), '┴');
    assert_eq!(bc.tee(Side::Left), '┤');
    assert_eq!(bc.tee(Side::Right), '├');
    assert_eq!(BoxChars::double().tee(Side::Bottom), '╤');
    assert_eq!(BoxChars::ascii().tee(Side::Top), '+');
}

#[test]
fn test_arrow_per_heading() {
    let bc = BoxChars::unicode();
    assert_eq!(bc.arrow(Heading::Down), '▼');
    assert_eq!(bc.arrow(Heading::Left), '◄');
    let ascii = BoxChars::ascii();
    assert_eq!(ascii.arrow(Heading::Up), '^');
    assert_eq!(ascii.arrow(Heading::Right), '>');
}

// ── Arms ─────────────────────────────────────────────────────────────────

#[test]
fn test_arms_toward_and_merge() {
    let a = Arms::toward(Heading::Up).merge(Arms::toward(Heading::Right));
    assert_eq!(a, Arms::new(true, false, false, true));
    assert!(a.is_bend());
    let straight = Arms::toward(Heading::Left).merge(Arms::toward(Heading::Right));
    assert!(!straight.is_bend());
    assert!(!Arms::new(true, true, true, false).is_bend());
}

#[test]
fn test_arms_to_char_unicode() {
    let bc = BoxChars::unicode();
    assert_eq!(Arms::new(true, true, true, true).to_char(&bc), '┼');
    assert_eq!(Arms::new(false, false, true, true).to_char(&bc), '─');
    assert_eq!(Arms::new(true, true, false, false).to_char(&bc), '│');
    assert_eq!(Arms::new(false, true, false, true).to_char(&bc), '┌');
    assert_eq!(Arms::new(true, false, true, false).to_char(&bc), '┘');
    assert_eq!(Arms::new(true, true, false, true).to_char(&bc), '├');
    assert_eq!(Arms::default().to_char(&bc), ' ');
}

#[test]
fn test_arms_to_char_rounded_bends() {
    let bc = BoxChars::rounded();
    assert_eq!(Arms::new(false, true, false, true).to_char(&bc), '╭');
    assert_eq!(Arms::new(true, false, false, true).to_char(&bc), '╰');
}

#[test]
fn test_arms_to_char_ascii() {
    let bc = BoxChars::ascii();
    assert_eq!(Arms::new(true, true, true, true).to_char(&bc), '+');
    assert_eq!(Arms::new(false, false, true, true).to_char(&bc), '-');
    assert_eq!(Arms::new(true, true, false, false).to_char(&bc), '|');
    assert_eq!(Arms::new(false, true, false, false).to_char(&bc), '|');
}
