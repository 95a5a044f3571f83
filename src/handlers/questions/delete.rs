use crate::{
    error::{self, Result},
    extractors::{Json, Path},
    utils::{paginate, Page, Paginated},
    StateTrait,
};
use axum::extract::State;
use entity::questions;
use sea_orm::{EntityTrait, QueryOrder};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Response {
    success: bool,
    delete: i32,
    questions: Vec<questions::Model>,
    total_questions: u64,
}

pub async fn delete_question<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    page: Page,
) -> Result<Json<Response>> {
    let res = questions::Entity::delete_by_id(id)
        .exec(state.db())
        .await?;

    // the web client expects 422, not 404, for an unknown id
    if res.rows_affected == 0 {
        return Err(error::UNPROCESSABLE);
    }

    info!(id, "deleted question");

    let select = questions::Entity::find().order_by_asc(questions::Column::Id);
    let Paginated { questions, total } = paginate(state.db(), select, page).await?;

    Ok(Json(Response {
        success: true,
        delete: id,
        questions,
        total_questions: total,
    }))
}
