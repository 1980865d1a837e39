use super::*;

#[test]
fn sheet_starts_closed() {
    assert!(!SheetState::default().open);
}

#[test]
fn toggle_flips_state() {
    let mut state = SheetState::default();
    state.toggle();
    assert!(state.open);
    state.toggle();
    assert!(!state.open);
}

#[test]
fn toggle_parity_decides_final_state() {
    for count in 0..8 {
        let mut state = SheetState::default();
        for _ in 0..count {
            state.toggle();
        }
        assert_eq!(state.open, count % 2 == 1, "after {count} toggles");
    }
}
