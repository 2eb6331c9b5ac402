use super::*;

/// Tests that an entry's purchases come back ordered by placement ascending.
#[tokio::test]
async fn returns_purchases_in_placement_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, entry) = factory::helpers::create_entry_with_dependencies(db).await?;

    let third = factory::purchase::create_purchase_at_placement(db, entry.id, 3).await?;
    let first = factory::purchase::create_purchase_at_placement(db, entry.id, 1).await?;
    let second = factory::purchase::create_purchase_at_placement(db, entry.id, 2).await?;

    let repo = PurchaseRepository::new(db);
    let purchases = repo.get_by_entry_id(entry.id).await?;

    let ids: Vec<i32> = purchases.iter().map(|purchase| purchase.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests that purchases of other entries are excluded.
#[tokio::test]
async fn excludes_other_entries_purchases() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, overview, entry) = factory::helpers::create_entry_with_dependencies(db).await?;
    let other_entry = factory::create_entry_in_overview(db, overview.id).await?;

    let wanted = factory::create_purchase(db, entry.id).await?;
    factory::create_purchase(db, other_entry.id).await?;

    let repo = PurchaseRepository::new(db);
    let purchases = repo.get_by_entry_id(entry.id).await?;

    assert_eq!(purchases.len(), 1);
    assert_eq!(purchases[0].id, wanted.id);

    Ok(())
}
