use super::*;

#[test]
fn default_config_is_the_portfolio_chart() {
    let cfg = ChartConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.skills.len(), 6);
    assert_eq!(cfg.skills[0], SkillEntry::new("Circuit Design", 90));
    assert_eq!(cfg.skills[5], SkillEntry::new("Embedded Systems", 75));
    assert_eq!(cfg.style.grid_levels, 5);
    assert!(cfg.font.is_none());
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let cfg = ChartConfig::from_json_str(
        r##"{
            "skills": [{"label": "A", "value": 90}, {"label": "B", "value": 50}],
            "style": {"accent": "#ff0000"}
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.skills.len(), 2);
    assert_eq!(cfg.width, 400.0);
    assert_eq!(cfg.style.accent, Rgba8::rgb(255, 0, 0));
    assert_eq!(cfg.style.grid_color, ChartStyle::default().grid_color);
}

#[test]
fn out_of_range_skill_value_is_rejected() {
    let err = ChartConfig::from_json_str(r#"{"skills": [{"label": "A", "value": 101}]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("outside 0..=100"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = ChartConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, RadarError::Serde(_)));

    let err = ChartConfig::from_json_str(r#"{"style": {"accent": "blue"}}"#).unwrap_err();
    assert!(matches!(err, RadarError::Serde(_)));
}

#[test]
fn invalid_geometry_and_style_are_rejected() {
    let cfg = ChartConfig {
        width: 0.0,
        ..ChartConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = ChartConfig {
        pixel_scale: -1.0,
        ..ChartConfig::default()
    };
    assert!(cfg.validate().is_err());

    let mut cfg = ChartConfig::default();
    cfg.style.grid_levels = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = ChartConfig::default();
    cfg.style.fill_alpha_rim = 1.5;
    assert!(cfg.validate().is_err());
}

#[test]
fn empty_skill_list_is_valid() {
    let cfg = ChartConfig::from_json_str(r#"{"skills": []}"#).unwrap();
    assert!(cfg.skills.is_empty());
}

#[test]
fn fraction_clamps_to_full_scale() {
    assert_eq!(SkillEntry::new("x", 50).fraction(), 0.5);
    assert_eq!(SkillEntry::new("x", 200).fraction(), 1.0);
}
