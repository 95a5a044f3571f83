pub use sea_orm_migration::prelude::*;

mod m20240310_101204_create_categories_table;
mod m20240310_101517_create_questions_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240310_101204_create_categories_table::Migration),
            Box::new(m20240310_101517_create_questions_table::Migration),
        ]
    }
}
