use crate::{
    error::{self, Result},
    extractors::{Json, Path},
    utils::{paginate, Page, Paginated},
    StateTrait,
};
use axum::extract::State;
use entity::{categories, questions};
use sea_orm::{EntityTrait, QueryOrder};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Response {
    success: bool,
    questions: Vec<questions::Model>,
    total_questions: u64,
    current_category: i32,
}

pub async fn list_questions_in_category<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    page: Page,
) -> Result<Json<Response>> {
    // an unknown category is reported as 422, not 404
    let Some(category) = categories::Entity::find_by_id(id).one(state.db()).await? else {
        return Err(error::UNPROCESSABLE);
    };

    let select =
        questions::Entity::find_in_category(category.id).order_by_asc(questions::Column::Id);
    let Paginated { questions, total } = paginate(state.db(), select, page).await?;

    Ok(Json(Response {
        success: true,
        questions,
        total_questions: total,
        current_category: category.id,
    }))
}
