use super::*;

/// Tests deleting a batch of purchases.
///
/// Verifies only the listed rows are removed and the affected count matches.
#[tokio::test]
async fn deletes_only_listed_purchases() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, entry) = factory::helpers::create_entry_with_dependencies(db).await?;

    let first = factory::create_purchase(db, entry.id).await?;
    let second = factory::create_purchase(db, entry.id).await?;
    let survivor = factory::create_purchase(db, entry.id).await?;

    let repo = PurchaseRepository::new(db);
    let affected = repo.delete_many(&[first.id, second.id]).await?;

    assert_eq!(affected, 2);
    assert!(repo.find_by_id(first.id).await?.is_none());
    assert!(repo.find_by_id(second.id).await?.is_none());
    assert!(repo.find_by_id(survivor.id).await?.is_some());

    Ok(())
}

/// Tests that unknown ids are skipped rather than failing the batch.
#[tokio::test]
async fn unknown_ids_are_skipped() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, entry) = factory::helpers::create_entry_with_dependencies(db).await?;
    let purchase = factory::create_purchase(db, entry.id).await?;

    let repo = PurchaseRepository::new(db);
    let affected = repo.delete_many(&[purchase.id, 9999]).await?;

    assert_eq!(affected, 1);

    Ok(())
}

/// Tests the empty-batch short-circuit.
#[tokio::test]
async fn empty_batch_deletes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PurchaseRepository::new(db);
    let affected = repo.delete_many(&[]).await?;

    assert_eq!(affected, 0);

    Ok(())
}
