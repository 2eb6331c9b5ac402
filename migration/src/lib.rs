pub use sea_orm_migration::prelude::*;

mod m20260106_000001_create_user_table;
mod m20260106_000002_create_overview_table;
mod m20260106_000003_create_logbook_table;
mod m20260106_000004_create_entry_table;
mod m20260106_000005_create_purchase_table;
mod m20260107_000006_create_bug_report_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260106_000001_create_user_table::Migration),
            Box::new(m20260106_000002_create_overview_table::Migration),
            Box::new(m20260106_000003_create_logbook_table::Migration),
            Box::new(m20260106_000004_create_entry_table::Migration),
            Box::new(m20260106_000005_create_purchase_table::Migration),
            Box::new(m20260107_000006_create_bug_report_table::Migration),
        ]
    }
}
