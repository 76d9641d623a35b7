use super::*;

#[test]
fn status_labels_cover_all_statuses() {
    assert_eq!(status_label(DeliveryStatus::Pending), "Pending");
    assert_eq!(status_label(DeliveryStatus::EnRoute), "En route");
    assert_eq!(status_label(DeliveryStatus::Delivered), "Delivered");
    assert_eq!(status_label(DeliveryStatus::Exception), "Exception");
}

#[test]
fn advance_label_follows_status_progression() {
    assert_eq!(advance_label(DeliveryStatus::Pending), Some("Start Run"));
    assert_eq!(advance_label(DeliveryStatus::EnRoute), Some("Mark Delivered"));
    assert_eq!(advance_label(DeliveryStatus::Delivered), None);
    assert_eq!(advance_label(DeliveryStatus::Exception), None);
}
