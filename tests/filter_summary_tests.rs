use resale_map::core::filter::{BATHROOM_OPTIONS, BEDROOM_OPTIONS};
use resale_map::core::{FilterCriteria, FilterDimension, RangeInput};

fn texts(criteria: &FilterCriteria) -> Vec<String> {
    criteria
        .summary()
        .into_iter()
        .map(|badge| badge.text)
        .collect()
}

#[test]
fn form_defaults_render_four_badges_in_form_order() {
    let criteria = FilterCriteria::form_defaults();
    let summary = criteria.summary();

    let dimensions: Vec<FilterDimension> = summary.iter().map(|badge| badge.dimension).collect();
    assert_eq!(dimensions, FilterDimension::ALL.to_vec());
    assert_eq!(
        texts(&criteria),
        vec![
            "sqft: min 0 max 3000",
            "BR: min 0 max 0",
            "BA: min 1 max 1",
            "Price: min $50,000.00 max $5,000,000.00",
        ]
    );
}

#[test]
fn unset_dimensions_are_omitted() {
    let criteria = FilterCriteria::default()
        .with_range(FilterDimension::Bedrooms, RangeInput::at_least("2"))
        .with_range(FilterDimension::Price, RangeInput::at_most("899999.5"));

    assert_eq!(
        texts(&criteria),
        vec!["BR: min 2", "Price: max $899,999.50"]
    );
}

#[test]
fn non_numeric_price_is_shown_verbatim() {
    let criteria =
        FilterCriteria::default().with_range(FilterDimension::Price, RangeInput::new("cheap", ""));

    assert_eq!(texts(&criteria), vec!["Price: min cheap"]);
}

#[test]
fn unconstrained_criteria_have_no_badges() {
    assert!(FilterCriteria::default().summary().is_empty());
}

#[test]
fn room_options_cover_form_choices() {
    assert_eq!(BEDROOM_OPTIONS.first(), Some(&0));
    assert_eq!(BEDROOM_OPTIONS.last(), Some(&9));
    assert_eq!(BATHROOM_OPTIONS.first(), Some(&1));
    assert_eq!(BATHROOM_OPTIONS.len(), 9);
}
