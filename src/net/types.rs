//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field for field so the
//! wrappers in `net::api` stay thin pass-throughs. Optional fields tolerate
//! older backend versions omitting them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated identity as reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Role key used for permission lookups (e.g. `"driver"`).
    pub role: String,
    /// Kitchen/depot site the user belongs to, if assigned.
    pub site: Option<String>,
}

/// Successful login/refresh payload: identity plus bearer credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// Credentials submitted to the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Lifecycle of a school delivery run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    #[default]
    Pending,
    EnRoute,
    Delivered,
    /// Delivery could not be completed (school closed, vehicle issue).
    Exception,
}

impl DeliveryStatus {
    /// The next stage a driver advances the task to, if any.
    #[must_use]
    pub fn advance(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::EnRoute),
            Self::EnRoute => Some(Self::Delivered),
            Self::Delivered | Self::Exception => None,
        }
    }
}

/// A single school delivery task on a driver's run sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTask {
    pub id: String,
    /// Destination school name.
    pub school: String,
    /// Named delivery route the task belongs to, if routed.
    pub route: Option<String>,
    /// ISO date the delivery is scheduled for.
    pub scheduled_for: String,
    /// Number of meals on the task.
    pub meal_count: i64,
    pub status: DeliveryStatus,
    pub driver_id: Option<String>,
    /// Free-form note (gate codes, contact person).
    pub note: Option<String>,
}

/// One person's attendance entry for one day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub user_id: String,
    /// ISO date of the shift.
    pub day: String,
    /// Clock-in time (RFC 3339), absent if not yet clocked in.
    pub clock_in: Option<String>,
    /// Clock-out time (RFC 3339), absent while still on shift.
    pub clock_out: Option<String>,
}

/// A stocked ingredient or supply item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    /// Stock-keeping unit (e.g. `"kg"`, `"case"`).
    pub unit: String,
    pub quantity: f64,
    /// Reorder threshold; at or below means the item is low.
    pub min_quantity: f64,
    pub category: Option<String>,
}

impl InventoryItem {
    /// Whether the item is at or below its reorder threshold.
    #[must_use]
    pub fn is_low(&self) -> bool {
        self.quantity <= self.min_quantity
    }
}

/// A manual stock correction posted against one item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub item_id: String,
    /// Signed quantity change in the item's unit.
    pub delta: f64,
    pub reason: String,
}

/// One ingredient line of a recipe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Inventory item backing this line, if linked.
    pub item_id: Option<String>,
    pub name: String,
    pub unit: String,
    /// Amount per `Recipe::servings` servings.
    pub amount: f64,
}

/// A kitchen recipe with its ingredient list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    /// Number of servings the ingredient amounts are scaled for.
    pub servings: i64,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

/// One planned day of a weekly menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDay {
    /// ISO date of the menu day.
    pub day: String,
    /// Meal slot (e.g. `"lunch"`).
    pub meal: String,
    #[serde(default)]
    pub recipe_ids: Vec<String>,
    pub note: Option<String>,
}

/// Approval/receipt lifecycle of a purchase order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseOrderStatus {
    #[default]
    Draft,
    Submitted,
    Approved,
    Received,
}

/// One line of a purchase order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderLine {
    pub item_id: Option<String>,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub unit_price: f64,
}

/// A supplier purchase order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: String,
    pub supplier: String,
    pub status: PurchaseOrderStatus,
    /// ISO date the goods are wanted by.
    pub ordered_for: String,
    #[serde(default)]
    pub lines: Vec<PurchaseOrderLine>,
    pub total: f64,
}

/// A tracked piece of equipment or property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    /// Site or room the asset currently sits in.
    pub location: String,
    /// ISO date of acquisition, if recorded.
    pub acquired_on: Option<String>,
}

/// Aggregated financials for one reporting period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinanceSummary {
    /// Period key: an ISO date for daily reports, `YYYY-MM` for monthly.
    pub period: String,
    pub revenue: f64,
    pub food_cost: f64,
    pub labor_cost: f64,
    pub other_cost: f64,
}

impl FinanceSummary {
    /// Net result for the period.
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.revenue - self.food_cost - self.labor_cost - self.other_cost
    }
}

/// Preparation stages shown on the kitchen display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KitchenStage {
    #[default]
    Queued,
    Prepping,
    Cooking,
    Plating,
    Done,
}

impl KitchenStage {
    /// The next stage a cook advances the ticket to, if any.
    #[must_use]
    pub fn advance(self) -> Option<Self> {
        match self {
            Self::Queued => Some(Self::Prepping),
            Self::Prepping => Some(Self::Cooking),
            Self::Cooking => Some(Self::Plating),
            Self::Plating => Some(Self::Done),
            Self::Done => None,
        }
    }
}

/// One production ticket on the kitchen display board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitchenTicket {
    pub id: String,
    pub recipe_name: String,
    /// Portions to produce.
    pub quantity: i64,
    /// Station the ticket is assigned to, if any.
    pub station: Option<String>,
    pub stage: KitchenStage,
    /// RFC 3339 deadline, if the dispatch schedule sets one.
    pub due_at: Option<String>,
}
