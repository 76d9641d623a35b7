//! Local-date helpers for period-scoped API calls.
//!
//! Requires a browser environment for the actual clock; outside it the
//! helpers return empty strings, which the backend treats as "today".

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

#[cfg(feature = "hydrate")]
fn format_date(date: &js_sys::Date) -> String {
    format!("{:04}-{:02}-{:02}", date.get_full_year(), date.get_month() + 1, date.get_date())
}

/// Days to subtract from a JS weekday (0 = Sunday) to land on Monday.
fn days_back_to_monday(weekday: u32) -> u32 {
    (weekday + 6) % 7
}

/// Today's local date as `YYYY-MM-DD`.
#[must_use]
pub fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        format_date(&js_sys::Date::new_0())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// The current local month as `YYYY-MM`.
#[must_use]
pub fn current_month() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format!("{:04}-{:02}", now.get_full_year(), now.get_month() + 1)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// The Monday of the current local week as `YYYY-MM-DD`.
#[must_use]
pub fn week_monday() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let back = f64::from(days_back_to_monday(now.get_day())) * 86_400_000.0;
        let monday = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(now.get_time() - back));
        format_date(&monday)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
