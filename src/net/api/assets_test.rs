use super::*;

#[test]
fn transfer_endpoint_formats_expected_path() {
    assert_eq!(transfer_endpoint("a3"), "/api/assets/a3/transfer");
}
