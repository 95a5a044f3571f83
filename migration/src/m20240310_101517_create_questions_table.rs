use entity::questions;
use sea_orm_migration::prelude::*;

const IDX_QUESTIONS_CATEGORY: &str = "IDX_questions_category";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(questions::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(questions::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(questions::Column::Question).text().not_null())
                    .col(ColumnDef::new(questions::Column::Answer).text().not_null())
                    // no foreign key, categories are referenced loosely
                    .col(ColumnDef::new(questions::Column::Category).integer().not_null())
                    .col(
                        ColumnDef::new(questions::Column::Difficulty)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_QUESTIONS_CATEGORY)
                    .table(questions::Entity)
                    .col(questions::Column::Category)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(questions::Entity).to_owned())
            .await
    }
}
