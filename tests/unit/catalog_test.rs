//! Unit tests for function catalog validation.

use accessnav::navigator::{FunctionCatalog, NavigatorError, SelectionController};

#[test]
fn test_empty_catalog_is_configuration_error() {
    let err = FunctionCatalog::new(Vec::<&str>::new()).unwrap_err();
    assert_eq!(err, NavigatorError::EmptyCatalog);
    assert!(err.to_string().contains("at least one"));
}

#[test]
fn test_catalog_preserves_order() {
    let catalog = FunctionCatalog::new(["C", "A", "B"]).unwrap();
    let entries: Vec<_> = catalog.iter().collect();
    assert_eq!(entries, ["C", "A", "B"]);
}

#[test]
fn test_single_entry_catalog_is_usable() {
    let catalog = FunctionCatalog::new(["Read Text"]).unwrap();
    let mut controller = SelectionController::new(catalog);
    assert_eq!(controller.next().value, "Read Text");
    assert_eq!(controller.previous().value, "Read Text");
}

#[test]
fn test_unicode_entries() {
    let catalog = FunctionCatalog::new(["Texte lire", "Décrire objets"]).unwrap();
    assert_eq!(catalog.get(1), Some("Décrire objets"));
}
