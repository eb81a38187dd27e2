use tempfile::TempDir;

use portal_core::{Favorite, FavoriteStore, ItemKind};

use crate::JsonFavorites;

fn create_store() -> (JsonFavorites, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFavorites::new(temp_dir.path()).unwrap();
    (store, temp_dir)
}

#[test]
fn test_add_list_remove() {
    let (store, _temp_dir) = create_store();
    let fav = Favorite::new("item-1", "honda-civic-2025", ItemKind::Vehicle, "Honda Civic 2025");

    assert!(store.add(&fav).unwrap());
    assert!(store.contains("item-1").unwrap());
    assert_eq!(store.count().unwrap(), 1);

    assert!(store.remove("item-1").unwrap());
    assert!(!store.contains("item-1").unwrap());
    assert!(!store.remove("item-1").unwrap());
}

#[test]
fn test_duplicate_add_is_rejected() {
    let (store, _temp_dir) = create_store();
    let fav = Favorite::new("item-1", "honda-civic-2025", ItemKind::Vehicle, "Honda Civic 2025");
    assert!(store.add(&fav).unwrap());
    assert!(!store.add(&fav).unwrap());
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_list_by_kind_filters() {
    let (store, _temp_dir) = create_store();
    store
        .add(&Favorite::new("item-1", "honda-civic-2025", ItemKind::Vehicle, "Honda Civic"))
        .unwrap();
    store
        .add(&Favorite::new("item-2", "dipirona-sodica", ItemKind::Medication, "Dipirona"))
        .unwrap();
    store
        .add(&Favorite::new("item-3", "feijao-carioca", ItemKind::Food, "Feijão"))
        .unwrap();

    let meds = store.list_by_kind(ItemKind::Medication).unwrap();
    assert_eq!(meds.len(), 1);
    assert_eq!(meds.first().unwrap().slug, "dipirona-sodica");
    assert_eq!(store.list().unwrap().len(), 3);
}

#[test]
fn test_clear_and_missing_file_reads_empty() {
    let (store, _temp_dir) = create_store();
    assert!(store.list().unwrap().is_empty());
    store
        .add(&Favorite::new("item-1", "slug", ItemKind::Vehicle, "Title"))
        .unwrap();
    store.clear().unwrap();
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_persists_across_store_instances() {
    let temp_dir = TempDir::new().unwrap();
    {
        let store = JsonFavorites::new(temp_dir.path()).unwrap();
        store
            .add(&Favorite::new("item-1", "slug", ItemKind::Food, "Title"))
            .unwrap();
    }
    let reopened = JsonFavorites::new(temp_dir.path()).unwrap();
    assert!(reopened.contains("item-1").unwrap());
}
