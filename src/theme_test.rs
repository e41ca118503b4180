use super::*;

#[test]
fn serialized_forms_are_exact() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn parse_accepts_only_exact_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("dark "), None);
    assert_eq!(Theme::parse("auto"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn parse_round_trips_as_str() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn glyph_names_the_next_action() {
    // Dark mode shows the sun ("switch to light"), light mode the moon.
    assert_eq!(Theme::Dark.glyph(), "☀️");
    assert_eq!(Theme::Light.glyph(), "🌙");
}

#[test]
fn flipped_inverts_both_values() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
}

#[test]
fn only_dark_sets_the_flag() {
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}

#[test]
fn serde_form_agrees_with_as_str() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    let parsed: Theme = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(parsed, Theme::Dark);
}
