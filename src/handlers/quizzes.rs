use crate::{
    error::{self, Result},
    extractors::Json,
    utils::deserialize_id,
    Error, StateTrait,
};
use axum::extract::State;
use entity::questions;
use rand::Rng;
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use serde::{Deserialize, Serialize};

/// `quiz_category.id` meaning every category.
const ALL_CATEGORIES: i32 = 0;

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_id")]
    id: i32,
}

#[derive(Debug, Deserialize)]
pub struct Request {
    previous_questions: Vec<i32>,
    quiz_category: QuizCategory,
}

#[derive(Debug, Serialize)]
pub struct Response {
    success: bool,
    question: questions::Model,
}

/// The questions a quiz round may still draw from.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Pool {
    All,
    Category(i32),
    Remaining(Vec<i32>),
    RemainingInCategory(i32, Vec<i32>),
}

impl Pool {
    fn new(category: i32, previous: Vec<i32>) -> Self {
        match (category, previous.is_empty()) {
            (ALL_CATEGORIES, true) => Self::All,
            (category, true) => Self::Category(category),
            (ALL_CATEGORIES, false) => Self::Remaining(previous),
            (category, false) => Self::RemainingInCategory(category, previous),
        }
    }

    fn select(&self) -> Select<questions::Entity> {
        let select = questions::Entity::find().order_by_asc(questions::Column::Id);

        match self {
            Self::All => select,
            Self::Category(category) => select.filter(questions::Column::Category.eq(*category)),
            Self::Remaining(previous) => {
                select.filter(questions::Column::Id.is_not_in(previous.iter().copied()))
            }
            Self::RemainingInCategory(category, previous) => select
                .filter(questions::Column::Category.eq(*category))
                .filter(questions::Column::Id.is_not_in(previous.iter().copied())),
        }
    }

    /// Error for a pool without questions. The web client expects 422 when both the
    /// category and the previous questions narrow the pool, 404 otherwise.
    fn exhausted(&self) -> Error {
        match self {
            Self::RemainingInCategory(..) => error::UNPROCESSABLE,
            Self::All | Self::Category(_) | Self::Remaining(_) => error::RESOURCE_NOT_FOUND,
        }
    }
}

/// Draws a random question from the pool. The client keeps track of the round.
pub async fn play_quiz<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    let pool = Pool::new(request.quiz_category.id, request.previous_questions);
    let select = pool.select();

    let total = select.clone().count(state.db()).await?;

    if total == 0 {
        debug!(?pool, "quiz pool is exhausted");
        return Err(pool.exhausted());
    }

    let offset = state.rng().gen_range(0..total);

    // the row can disappear between counting and fetching
    let Some(question) = select.offset(offset).one(state.db()).await? else {
        return Err(pool.exhausted());
    };

    Ok(Json(Response {
        success: true,
        question,
    }))
}
