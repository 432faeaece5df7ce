use resale_map::MapViewError;
use resale_map::api::{MapSession, SessionConfig};
use resale_map::core::BoundingBox;
use resale_map::render::NullPresenter;

#[test]
fn defaults_match_the_viewer_setup() {
    let config = SessionConfig::default();

    assert_eq!(config.items_per_page, 10);
    assert_eq!(config.max_visible_count, 10);
    assert!((config.fit_bounds_padding - 40.0).abs() <= 1e-9);
    assert_eq!(config.fit_bounds_duration_ms, 1000);
    assert!(config.filters_enabled);
    assert_eq!(config.map_max_bounds.as_array(), [-123.6, 49.0, -121.8, 49.6]);
}

#[test]
fn missing_json_fields_fall_back_to_defaults() {
    let config: SessionConfig =
        serde_json::from_str(r#"{ "max_visible_count": 25 }"#).expect("parse config");

    assert_eq!(config.max_visible_count, 25);
    assert_eq!(config.items_per_page, 10);
    assert_eq!(config.map_max_bounds, BoundingBox::LOWER_MAINLAND);
}

#[test]
fn zero_window_sizes_are_rejected() {
    let zero_rows = SessionConfig::default().with_max_visible_count(0);
    let zero_step = SessionConfig::default().with_items_per_page(0);

    assert!(matches!(
        zero_rows.validate(),
        Err(MapViewError::InvalidConfig(_))
    ));
    assert!(matches!(
        MapSession::new(NullPresenter::default(), Vec::new(), zero_step),
        Err(MapViewError::InvalidConfig(_))
    ));
}

#[test]
fn fit_bounds_and_map_bounds_are_checked() {
    let negative_padding = SessionConfig::default().with_fit_bounds(-1.0, 500);
    let inverted_bounds = SessionConfig::default()
        .with_map_max_bounds(BoundingBox::new(-121.8, 49.6, -123.6, 49.0));
    let custom = SessionConfig::default()
        .with_fit_bounds(16.0, 250)
        .with_filters_enabled(false);

    assert!(negative_padding.validate().is_err());
    assert!(inverted_bounds.validate().is_err());
    assert_eq!(custom.validate().expect("valid config"), custom);
}

#[test]
fn session_starts_with_filters_disabled_when_configured() {
    let config = SessionConfig::default().with_filters_enabled(false);
    let session = MapSession::new(NullPresenter::default(), Vec::new(), config).expect("session");

    assert!(!session.state().filters_enabled());
    assert_eq!(session.window_range(), None);
}

#[test]
fn zero_sizes_read_from_json_fail_session_construction() {
    let config: SessionConfig =
        serde_json::from_str(r#"{ "max_visible_count": 0 }"#).expect("parse config");

    assert!(matches!(
        MapSession::new(NullPresenter::default(), Vec::new(), config),
        Err(MapViewError::InvalidConfig(_))
    ));
}
