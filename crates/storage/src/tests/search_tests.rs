use super::{create_medication_item, create_test_storage, create_test_vertical, create_vehicle_item};

#[test]
fn test_search_matches_title_prefix() {
    let (storage, _temp_dir) = create_test_storage();
    let vid = storage.upsert_vertical(&create_test_vertical("fipe")).unwrap();
    storage
        .upsert_items(
            &vid,
            &[
                create_vehicle_item("honda-civic-2025", "Honda Civic 2025", 145_200.0),
                create_vehicle_item("chevrolet-onix-2024", "Chevrolet Onix 2024", 78_500.0),
            ],
        )
        .unwrap();

    let hits = storage.search_items("civ", 10).unwrap();
    assert_eq!(hits.len(), 1);
    let hit = hits.first().unwrap();
    assert_eq!(hit.slug, "honda-civic-2025");
    assert_eq!(hit.vertical_slug, "fipe");
    assert!(hit.score > 0.0);
}

#[test]
fn test_search_reflects_updated_rows() {
    let (storage, _temp_dir) = create_test_storage();
    let vid = storage.upsert_vertical(&create_test_vertical("fipe")).unwrap();
    storage
        .upsert_items(&vid, &[create_vehicle_item("car-1", "Old Title", 1000.0)])
        .unwrap();
    storage
        .upsert_items(&vid, &[create_vehicle_item("car-1", "Fresh Title", 1000.0)])
        .unwrap();

    assert!(storage.search_items("old", 10).unwrap().is_empty());
    assert_eq!(storage.search_items("fresh", 10).unwrap().len(), 1);
}

#[test]
fn test_search_spans_verticals() {
    let (storage, _temp_dir) = create_test_storage();
    let fipe = storage.upsert_vertical(&create_test_vertical("fipe")).unwrap();
    let meds = storage.upsert_vertical(&create_test_vertical("medicamentos")).unwrap();
    storage
        .upsert_items(&fipe, &[create_vehicle_item("dipirona-car", "Dipirona Car", 1000.0)])
        .unwrap();
    storage
        .upsert_items(&meds, &[create_medication_item("dipirona-sodica", "Dipirona Sódica")])
        .unwrap();

    let hits = storage.search_items("dipirona", 10).unwrap();
    assert_eq!(hits.len(), 2);
}

#[test]
fn test_search_no_match_is_empty() {
    let (storage, _temp_dir) = create_test_storage();
    let vid = storage.upsert_vertical(&create_test_vertical("fipe")).unwrap();
    storage
        .upsert_items(&vid, &[create_vehicle_item("car-1", "Some Car", 1000.0)])
        .unwrap();
    assert!(storage.search_items("zzzzzz", 10).unwrap().is_empty());
    assert!(storage.search_items("   ", 10).unwrap().is_empty());
}
