use super::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Tests the transactional entry + companion purchase insert.
///
/// Verifies the created entry carries exactly one purchase row, empty apart
/// from its entry foreign key.
#[tokio::test]
async fn creates_entry_and_exactly_one_empty_purchase() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let overview = factory::create_overview(db, user.id).await?;

    let repo = EntryRepository::new(db);
    let created = repo
        .create_with_initial_purchase(CreateEntryParams {
            name: "Groceries".to_string(),
            overview_id: Some(overview.id),
            logbook_id: None,
        })
        .await?;

    assert_eq!(created.entry.name, "Groceries");
    assert_eq!(created.entry.total_spent, 0.0);
    assert_eq!(created.entry.overview_id, Some(overview.id));
    assert_eq!(created.purchases.len(), 1);

    let companion = &created.purchases[0];
    assert_eq!(companion.entry_id, created.entry.id);
    assert!(companion.placement.is_none());
    assert!(companion.category.is_none());
    assert!(companion.description.is_none());
    assert!(companion.cost.is_none());

    let stored = entity::prelude::Purchase::find()
        .filter(entity::purchase::Column::EntryId.eq(created.entry.id))
        .count(db)
        .await?;
    assert_eq!(stored, 1);

    Ok(())
}
