use super::*;

#[test]
fn adjust_endpoint_formats_expected_path() {
    assert_eq!(adjust_endpoint("i42"), "/api/inventory/items/i42/adjust");
}
