use super::*;

#[test]
fn monday_offset_covers_every_weekday() {
    // JS weekday numbering: 0 = Sunday.
    assert_eq!(days_back_to_monday(1), 0); // Monday
    assert_eq!(days_back_to_monday(2), 1); // Tuesday
    assert_eq!(days_back_to_monday(6), 5); // Saturday
    assert_eq!(days_back_to_monday(0), 6); // Sunday
}

#[test]
fn date_helpers_are_empty_off_browser() {
    assert_eq!(today(), "");
    assert_eq!(current_month(), "");
    assert_eq!(week_monday(), "");
}
