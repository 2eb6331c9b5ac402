use super::*;

/// Tests the overview create/read/update/delete round.
#[tokio::test]
async fn create_read_update_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Overview)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = OverviewRepository::new(db);

    let created = repo
        .create(CreateOverviewParams {
            income: 4200.0,
            savings: 15.0,
            owner_id: user.id,
        })
        .await?;
    assert_eq!(created.income, 4200.0);
    assert_eq!(created.owner_id, user.id);

    let fetched = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(fetched, created);

    let updated = repo
        .update(
            created.id,
            UpdateOverviewParams {
                income: Some(5000.0),
                savings: None,
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.income, 5000.0);
    assert_eq!(updated.savings, 15.0);

    let deleted = repo.delete(created.id).await?;
    assert_eq!(deleted, Some(created.id));
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}
