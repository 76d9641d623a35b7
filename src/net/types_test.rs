use super::*;

fn task(status: DeliveryStatus) -> DeliveryTask {
    DeliveryTask {
        id: "t-1".to_owned(),
        school: "Northside Primary".to_owned(),
        route: Some("R2".to_owned()),
        scheduled_for: "2026-03-02".to_owned(),
        meal_count: 180,
        status,
        driver_id: Some("u-7".to_owned()),
        note: None,
    }
}

// =============================================================
// Status enums
// =============================================================

#[test]
fn delivery_status_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&DeliveryStatus::EnRoute).unwrap(), r#""en_route""#);
    let parsed: DeliveryStatus = serde_json::from_str(r#""exception""#).unwrap();
    assert_eq!(parsed, DeliveryStatus::Exception);
}

#[test]
fn delivery_status_advance_stops_at_terminal_states() {
    assert_eq!(DeliveryStatus::Pending.advance(), Some(DeliveryStatus::EnRoute));
    assert_eq!(DeliveryStatus::EnRoute.advance(), Some(DeliveryStatus::Delivered));
    assert_eq!(DeliveryStatus::Delivered.advance(), None);
    assert_eq!(DeliveryStatus::Exception.advance(), None);
}

#[test]
fn kitchen_stage_advance_walks_the_full_pipeline() {
    let mut stage = KitchenStage::Queued;
    let mut seen = vec![stage];
    while let Some(next) = stage.advance() {
        stage = next;
        seen.push(stage);
    }
    assert_eq!(
        seen,
        vec![
            KitchenStage::Queued,
            KitchenStage::Prepping,
            KitchenStage::Cooking,
            KitchenStage::Plating,
            KitchenStage::Done,
        ]
    );
}

// =============================================================
// Struct decoding
// =============================================================

#[test]
fn auth_session_round_trips() {
    let session = AuthSession {
        user: User {
            id: "u-1".to_owned(),
            name: "Alice".to_owned(),
            role: "admin".to_owned(),
            site: None,
        },
        token: "abc".to_owned(),
    };
    let raw = serde_json::to_string(&session).unwrap();
    let back: AuthSession = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, session);
}

#[test]
fn delivery_task_tolerates_missing_optional_fields() {
    let raw = r#"{
        "id": "t-9",
        "school": "Hillcrest Elementary",
        "scheduled_for": "2026-03-02",
        "meal_count": 95,
        "status": "pending"
    }"#;
    let parsed: DeliveryTask = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.route, None);
    assert_eq!(parsed.driver_id, None);
    assert_eq!(parsed.status, DeliveryStatus::Pending);
}

#[test]
fn recipe_defaults_empty_ingredient_list() {
    let raw = r#"{"id":"r-1","name":"Vegetable curry","servings":200}"#;
    let parsed: Recipe = serde_json::from_str(raw).unwrap();
    assert!(parsed.ingredients.is_empty());
    assert_eq!(parsed.category, None);
}

#[test]
fn delivery_task_round_trips() {
    let t = task(DeliveryStatus::Delivered);
    let raw = serde_json::to_string(&t).unwrap();
    let back: DeliveryTask = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, t);
}

// =============================================================
// Derived values
// =============================================================

#[test]
fn inventory_item_low_at_or_below_threshold() {
    let mut item = InventoryItem {
        id: "i-1".to_owned(),
        name: "Rice".to_owned(),
        unit: "kg".to_owned(),
        quantity: 25.0,
        min_quantity: 25.0,
        category: None,
    };
    assert!(item.is_low());
    item.quantity = 25.1;
    assert!(!item.is_low());
}

#[test]
fn finance_summary_balance_subtracts_all_costs() {
    let summary = FinanceSummary {
        period: "2026-02".to_owned(),
        revenue: 1000.0,
        food_cost: 400.0,
        labor_cost: 300.0,
        other_cost: 50.0,
    };
    assert!((summary.balance() - 250.0).abs() < f64::EPSILON);
}
