use std::io::Cursor;

use chrono::NaiveDate;
use resale_map::MapViewError;
use resale_map::core::{load_records, load_records_from_path, load_records_from_str};

const HEADER: &str = "id,area_sqft,bedrooms,bathrooms,price,date,address,latitude,longitude";

#[test]
fn parses_rows_as_strings_in_file_order() {
    let input = format!(
        "{HEADER}\n\
         47679,1004,3,2,780000,2023-01-05,2028 37TH AVENUE E,49.23668,-123.06504\n\
         136281,1229,3,2,755000,2023-02-17,2250 MARINE DRIVE SE,49.20746,-123.06061\n"
    );
    let records = load_records_from_str(&input).expect("parse dataset");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "47679");
    assert_eq!(records[0].address, "2028 37TH AVENUE E");
    assert_eq!(records[1].price, "755000");
    assert_eq!(records[1].price_value(), Some(755_000.0));
    assert_eq!(
        records[1].listed_on(),
        NaiveDate::from_ymd_opt(2023, 2, 17)
    );
}

#[test]
fn strips_bom_trims_fields_and_skips_blank_lines() {
    let input = format!(
        "\u{feff}{HEADER}\n\
         \n\
         1 , 800 , 2 , 1 , 500000 , 2024-01-01 , 123 Test St , 49.2827 , -123.1207 \n\
         \n"
    );
    let records = load_records_from_str(&input).expect("parse dataset");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "1");
    assert_eq!(records[0].address, "123 Test St");
    assert_eq!(records[0].longitude, "-123.1207");
}

#[test]
fn malformed_cells_are_kept_verbatim() {
    let input = format!("{HEADER}\n9,n/a,2,1,1,not-a-date,Somewhere,invalid_latitude,-123.1\n");
    let records = load_records_from_str(&input).expect("parse dataset");

    assert_eq!(records[0].area_sqft_value(), None);
    assert!(records[0].latitude_value().is_nan());
    assert_eq!(records[0].listed_on(), None);
}

#[test]
fn missing_columns_are_reported_as_dataset_errors() {
    let input = "id,area_sqft,bedrooms\n1,800,2\n";
    let err = load_records_from_str(input).expect_err("missing columns");

    assert!(matches!(err, MapViewError::Dataset(_)));
    assert!(err.to_string().contains("row 1"));
}

#[test]
fn reads_from_any_reader() {
    let input = format!("{HEADER}\n5,600,1,1,420000,2023-07-07,5 Oak St,49.25,-123.12\n");
    let records = load_records(Cursor::new(input.into_bytes())).expect("parse dataset");
    assert_eq!(records.len(), 1);
}

#[test]
fn missing_file_is_a_dataset_error() {
    let err = load_records_from_path(std::path::Path::new("/nonexistent/resale.csv"))
        .expect_err("missing file");
    assert!(matches!(err, MapViewError::Dataset(_)));
}
