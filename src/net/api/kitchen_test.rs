use super::*;

#[test]
fn board_endpoint_includes_day_filter() {
    assert_eq!(board_endpoint("2026-03-02"), "/api/kitchen/board?day=2026-03-02");
}

#[test]
fn stage_endpoint_formats_expected_path() {
    assert_eq!(stage_endpoint("k9"), "/api/kitchen/tickets/k9/stage");
}
