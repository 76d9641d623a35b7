use super::*;

#[test]
fn ui_state_default_nav_closed() {
    let state = UiState::default();
    assert!(!state.nav_open);
}
