use resale_map::core::filter::validate;
use resale_map::core::{FilterCriteria, FilterDimension, RangeInput};

fn criteria(
    square_feet: (&str, &str),
    bedrooms: (&str, &str),
    bathrooms: (&str, &str),
    price: (&str, &str),
) -> FilterCriteria {
    FilterCriteria {
        square_feet: RangeInput::new(square_feet.0, square_feet.1),
        bedrooms: RangeInput::new(bedrooms.0, bedrooms.1),
        bathrooms: RangeInput::new(bathrooms.0, bathrooms.1),
        price: RangeInput::new(price.0, price.1),
    }
}

#[test]
fn valid_input_produces_no_errors() {
    let result = validate(&criteria(
        ("100", "550"),
        ("1", "3"),
        ("1", "2"),
        ("100000", "500000"),
    ));

    assert!(result.is_valid);
    assert!(!result.has_errors());
    assert_eq!(result.errors.count(), 0);
    for dimension in FilterDimension::ALL {
        assert!(result.errors.get(dimension).is_empty());
    }
}

#[test]
fn square_feet_below_one_is_rejected_on_both_sides() {
    let result = validate(&criteria(
        ("-100", "0"),
        ("1", "3"),
        ("1", "2"),
        ("100000", "500000"),
    ));

    assert!(result.has_errors());
    assert_eq!(
        result.errors.square_feet.min.as_deref(),
        Some("Min square feet cannot be negative or less than 1.")
    );
    assert_eq!(
        result.errors.square_feet.max.as_deref(),
        Some("Max square feet cannot be negative or less than 1.")
    );
    assert_eq!(result.errors.count(), 2);
}

#[test]
fn inverted_square_feet_range_flags_the_max_field() {
    let result = validate(&criteria(
        ("300", "200"),
        ("1", "3"),
        ("1", "2"),
        ("100000", "500000"),
    ));

    assert!(result.has_errors());
    assert!(result.errors.square_feet.min.is_none());
    assert_eq!(
        result.errors.square_feet.max.as_deref(),
        Some("Max square feet must be greater than Min square feet.")
    );
}

#[test]
fn inverted_room_ranges_flag_the_max_field() {
    let result = validate(&criteria(
        ("100", "500"),
        ("4", "2"),
        ("3", "2"),
        ("100000", "500000"),
    ));

    assert_eq!(
        result.errors.bedrooms.max.as_deref(),
        Some("Max bedrooms must be greater than Min bedrooms.")
    );
    assert_eq!(
        result.errors.bathrooms.max.as_deref(),
        Some("Max bathrooms must be greater than Min bathrooms.")
    );
    assert_eq!(result.errors.count(), 2);
}

#[test]
fn zero_bedrooms_is_accepted() {
    let result = validate(&criteria(
        ("100", "500"),
        ("0", "0"),
        ("1", "1"),
        ("100000", "500000"),
    ));
    assert!(result.is_valid);
}

#[test]
fn non_positive_price_is_rejected_on_both_sides() {
    let result = validate(&criteria(
        ("100", "500"),
        ("1", "3"),
        ("1", "2"),
        ("-1000", "0"),
    ));

    assert_eq!(
        result.errors.price.min.as_deref(),
        Some("Min price cannot be a negative number or 0.")
    );
    assert_eq!(
        result.errors.price.max.as_deref(),
        Some("Max price cannot be a negative number or 0.")
    );
}

#[test]
fn inverted_price_range_flags_the_max_field() {
    let result = validate(&criteria(
        ("100", "500"),
        ("1", "3"),
        ("1", "2"),
        ("300000", "200000"),
    ));

    assert_eq!(
        result.errors.price.max.as_deref(),
        Some("Max price must be greater than Min price.")
    );
    assert_eq!(result.errors.count(), 1);
}

#[test]
fn non_numeric_bounds_are_rejected() {
    let result = validate(&criteria(
        ("abc", "12abc"),
        ("1", "3"),
        ("1", "2"),
        ("NaN", "inf"),
    ));

    assert_eq!(
        result.errors.square_feet.min.as_deref(),
        Some("Min square feet must be a valid number.")
    );
    assert_eq!(
        result.errors.square_feet.max.as_deref(),
        Some("Max square feet must be a valid number.")
    );
    assert_eq!(
        result.errors.price.min.as_deref(),
        Some("Min price must be a valid number.")
    );
    assert_eq!(
        result.errors.price.max.as_deref(),
        Some("Max price must be a valid number.")
    );
    assert_eq!(result.errors.count(), 4);
}

#[test]
fn blank_and_missing_bounds_are_unset() {
    let input = FilterCriteria::default()
        .with_range(FilterDimension::SquareFeet, RangeInput::new("  ", ""))
        .with_range(FilterDimension::Price, RangeInput::at_most("750000"));

    let result = validate(&input);
    assert!(result.is_valid);
    assert!(!input.square_feet.is_constrained());
    assert!(input.price.is_constrained());
}

#[test]
fn padded_numbers_are_accepted() {
    let result = validate(&criteria(
        (" 100 ", "500"),
        ("1", "3"),
        ("1", "2"),
        ("100000", " 500000"),
    ));
    assert!(result.is_valid);
}

#[test]
fn form_defaults_flag_the_zero_square_feet_minimum() {
    let result = validate(&FilterCriteria::form_defaults());

    assert_eq!(
        result.errors.square_feet.min.as_deref(),
        Some("Min square feet cannot be negative or less than 1.")
    );
    assert_eq!(result.errors.count(), 1);
}

#[test]
fn validation_result_serializes_for_the_form() {
    let result = validate(&criteria(
        ("100", "500"),
        ("1", "3"),
        ("1", "2"),
        ("300000", "200000"),
    ));
    let json = serde_json::to_value(&result).expect("serialize validation");

    assert_eq!(json["is_valid"], serde_json::Value::Bool(false));
    assert_eq!(
        json["errors"]["price"]["max"],
        serde_json::Value::String("Max price must be greater than Min price.".to_owned())
    );
    assert!(json["errors"]["price"]["min"].is_null());
}
