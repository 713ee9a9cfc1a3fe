use minas::{Cell, Visibility};

#[test]
fn fresh_cell_is_hidden_and_clear() {
    let cell = Cell::new();
    assert!(cell.is_hidden());
    assert!(!cell.is_mined());
    assert!(!cell.is_revealed());
    assert_eq!(cell.to_string(), "#");
}

#[test]
fn toggle_flips_between_hidden_and_flagged() {
    let mut cell = Cell::new();
    assert!(cell.toggle_flag());
    assert!(cell.is_flagged());
    assert_eq!(cell.to_string(), "@");
    assert!(cell.toggle_flag());
    assert!(cell.is_hidden());
}

#[test]
fn revealed_cells_ignore_toggles() {
    let mut cell = Cell::new();
    cell.reveal();
    assert_eq!(cell.visibility(), Visibility::Revealed);
    assert!(!cell.toggle_flag());
    assert_eq!(cell.visibility(), Visibility::Revealed);
    assert_eq!(cell.to_string(), "?");
}

#[test]
fn mine_is_independent_of_visibility() {
    let mut cell = Cell::new();
    cell.flag();
    cell.plant_mine();
    assert!(cell.is_flagged());
    assert!(cell.is_mined());
    cell.reveal();
    assert_eq!(cell.visibility(), Visibility::RevealedMine);
    assert!(cell.is_revealed());
    assert!(!cell.toggle_flag());
    assert_eq!(cell.to_string(), "X");
}

#[test]
fn unflag_returns_to_hidden() {
    let mut cell = Cell::new();
    cell.flag();
    cell.unflag();
    assert!(cell.is_hidden());
}
