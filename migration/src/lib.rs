pub use sea_orm_migration::prelude::*;

mod m20251101_000001_group_attribute_type;
mod m20251101_000002_product;
mod m20251101_000003_group_attribute;
mod m20251101_000004_attribute;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_group_attribute_type::Migration),
            Box::new(m20251101_000002_product::Migration),
            Box::new(m20251101_000003_group_attribute::Migration),
            Box::new(m20251101_000004_attribute::Migration),
        ]
    }
}
