#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Shell UI state shared across pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the navigation drawer is open (mobile layout).
    pub nav_open: bool,
}
