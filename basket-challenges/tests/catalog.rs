use basket_challenges::*;
use std::io::Write;

#[test]
fn test_grocery_catalog_order_and_size() {
    let catalog = Catalog::grocery();
    assert_eq!(catalog.len(), 15);
    let ids: Vec<u32> = catalog.items().iter().map(|item| item.id).collect();
    assert_eq!(ids, (1..=15).collect::<Vec<u32>>());
}

#[test]
fn test_lookup_eggs() {
    let catalog = Catalog::grocery();
    let eggs = catalog.get(3).unwrap();
    assert_eq!(eggs, &Item::new(3, "Eggs", 9, 1, 3.00));
    assert_eq!(eggs.price, Price::from_cents(300));
    assert_eq!(catalog.position(3), Some(2));
}

#[test]
fn test_lookup_missing_item() {
    let catalog = Catalog::grocery();
    assert_eq!(catalog.get(999), Err(CatalogError::ItemNotFound(999)));
    assert_eq!(catalog.position(999), None);
}

#[test]
fn test_rejects_invalid_catalogs() {
    assert_eq!(
        Catalog::new(vec![
            Item::new(1, "Milk", 8, 2, 3.5),
            Item::new(1, "Bread", 7, 1, 2.5),
        ]),
        Err(CatalogError::DuplicateId(1))
    );
    assert_eq!(
        Catalog::new(vec![Item::new(4, "Air", 1, 0, 1.0)]),
        Err(CatalogError::InvalidWeight(4))
    );
    assert_eq!(
        Catalog::new(vec![Item::new(0, "Nothing", 1, 1, 1.0)]),
        Err(CatalogError::InvalidId)
    );
    let too_many = (1..=129).map(|id| Item::new(id, "x", 1, 1, 1.0)).collect();
    assert_eq!(
        Catalog::new(too_many),
        Err(CatalogError::TooManyItems { len: 129, max: 128 })
    );
}

#[test]
fn test_serde_as_item_array() {
    let catalog = Catalog::new(vec![Item::new(2, "Bread", 7, 1, 2.5)]).unwrap();
    let json = serde_json::to_value(&catalog).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"id": 2, "name": "Bread", "value": 7, "weight": 1, "price": 2.5}])
    );
    let parsed: Catalog = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, catalog);
    assert!(serde_json::from_value::<Catalog>(serde_json::json!([
        {"id": 2, "name": "Bread", "value": 7, "weight": 1, "price": 2.5},
        {"id": 2, "name": "Bread", "value": 7, "weight": 1, "price": 2.5}
    ]))
    .is_err());
}

#[test]
fn test_from_json_file() {
    let path = std::env::temp_dir().join(format!("basket-catalog-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"[{{"id": 7, "name": "Rice", "value": 7, "weight": 3, "price": 2.0}}]"#
    )
    .unwrap();
    drop(file);

    let catalog = Catalog::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(catalog.items(), &[Item::new(7, "Rice", 7, 3, 2.0)]);
}
