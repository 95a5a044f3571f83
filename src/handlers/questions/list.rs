use crate::{
    error::{self, Result},
    extractors::Json,
    handlers::categories::category_map,
    utils::{paginate, Page, Paginated},
    StateTrait,
};
use axum::extract::State;
use entity::questions;
use sea_orm::{EntityTrait, QueryOrder};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct Response {
    success: bool,
    questions: Vec<questions::Model>,
    total_questions: u64,
    categories: BTreeMap<i32, String>,
    current_category: Option<i32>,
}

pub async fn list_questions<S: StateTrait>(
    State(state): State<S>,
    page: Page,
) -> Result<Json<Response>> {
    let select = questions::Entity::find().order_by_asc(questions::Column::Id);
    let Paginated { questions, total } = paginate(state.db(), select, page).await?;

    if questions.is_empty() {
        return Err(error::RESOURCE_NOT_FOUND);
    }

    let categories = category_map(state.db()).await?;

    Ok(Json(Response {
        success: true,
        questions,
        total_questions: total,
        categories,
        current_category: None,
    }))
}
