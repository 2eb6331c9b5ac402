use super::*;

/// Tests fetching an overview's entries with their purchase lists.
///
/// Verifies each entry carries its own purchases ordered by placement
/// ascending.
#[tokio::test]
async fn overview_entries_carry_purchases_ordered_by_placement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let overview = factory::create_overview(db, user.id).await?;
    let entry = factory::create_entry_in_overview(db, overview.id).await?;

    let second = factory::purchase::create_purchase_at_placement(db, entry.id, 2).await?;
    let first = factory::purchase::create_purchase_at_placement(db, entry.id, 1).await?;

    let repo = EntryRepository::new(db);
    let results = repo.get_by_overview_id(overview.id).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry.id, entry.id);

    let placements: Vec<Option<i32>> = results[0]
        .purchases
        .iter()
        .map(|purchase| purchase.placement)
        .collect();
    assert_eq!(placements, vec![Some(1), Some(2)]);
    assert_eq!(results[0].purchases[0].id, first.id);
    assert_eq!(results[0].purchases[1].id, second.id);

    Ok(())
}

/// Tests that logbook entries are filtered to the requested logbook only.
#[tokio::test]
async fn logbook_entries_exclude_other_parents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let logbook = factory::create_logbook(db, user.id).await?;
    let other_logbook = factory::create_logbook(db, user.id).await?;

    let wanted = factory::create_entry_in_logbook(db, logbook.id).await?;
    factory::create_entry_in_logbook(db, other_logbook.id).await?;

    let repo = EntryRepository::new(db);
    let results = repo.get_by_logbook_id(logbook.id).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry.id, wanted.id);

    Ok(())
}
