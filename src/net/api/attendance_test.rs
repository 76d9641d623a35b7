use super::*;

#[test]
fn records_endpoint_includes_month_filter() {
    assert_eq!(records_endpoint("2026-02"), "/api/attendance/records?month=2026-02");
}
