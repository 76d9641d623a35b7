use super::*;

#[test]
fn report_endpoints_include_period_filters() {
    assert_eq!(daily_endpoint("2026-03-02"), "/api/finance/daily?day=2026-03-02");
    assert_eq!(monthly_endpoint("2026-02"), "/api/finance/monthly?month=2026-02");
}
