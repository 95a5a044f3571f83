mod list;
mod questions;

use crate::StateTrait;
use axum::{routing::get, Router};
use entity::categories;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};
use std::collections::BTreeMap;

/// Routes for categories
///
/// GET /categories
/// GET /categories/{id}/questions?page=
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/categories", get(list::list_categories::<S>))
        .route(
            "/categories/{id}/questions",
            get(questions::list_questions_in_category::<S>),
        )
}

/// Every category as `id -> type`, serialized as a JSON object.
pub(super) async fn category_map<C>(db: &C) -> Result<BTreeMap<i32, String>, DbErr>
where
    C: ConnectionTrait,
{
    let categories = categories::Entity::find()
        .order_by_asc(categories::Column::Id)
        .all(db)
        .await?;

    Ok(categories
        .into_iter()
        .map(|category| (category.id, category.kind))
        .collect())
}
