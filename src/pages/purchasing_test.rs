use super::*;

#[test]
fn order_status_labels_cover_all_statuses() {
    assert_eq!(order_status_label(PurchaseOrderStatus::Draft), "Draft");
    assert_eq!(order_status_label(PurchaseOrderStatus::Submitted), "Submitted");
    assert_eq!(order_status_label(PurchaseOrderStatus::Approved), "Approved");
    assert_eq!(order_status_label(PurchaseOrderStatus::Received), "Received");
}
