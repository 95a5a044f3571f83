use crate::{
    error::{self, Result},
    extractors::Json,
    utils::{deserialize_optional_id, paginate, Page, Paginated},
    Error, StateTrait,
};
use axum::extract::State;
use entity::{categories, questions};
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    category: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    difficulty: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    success: bool,
    questions: Vec<questions::Model>,
    total_questions: u64,
    current_category: Option<i32>,
}

/// A non-empty `searchTerm` makes this a search, every other field is ignored then.
pub async fn create_or_search<S: StateTrait>(
    State(state): State<S>,
    page: Page,
    request: std::result::Result<Json<Request>, Error>,
) -> Result<Json<Response>> {
    let Ok(Json(request)) = request else {
        return Err(error::UNPROCESSABLE);
    };

    match request.search_term.as_deref() {
        Some(term) if !term.is_empty() => search_questions(&state, term, page).await,
        _ => create_question(&state, request, page).await,
    }
}

async fn search_questions<S: StateTrait>(
    state: &S,
    term: &str,
    page: Page,
) -> Result<Json<Response>> {
    debug!(term, "searching questions");

    let question = Expr::expr(Func::lower(Expr::col(questions::Column::Question)));

    let select = questions::Entity::find()
        .filter(question.like(contains(term)))
        .order_by_asc(questions::Column::Id);

    let Paginated { questions, total } = paginate(state.db(), select, page).await?;

    Ok(Json(Response {
        success: true,
        questions,
        total_questions: total,
        current_category: None,
    }))
}

async fn create_question<S: StateTrait>(
    state: &S,
    request: Request,
    page: Page,
) -> Result<Json<Response>> {
    let (Some(question), Some(answer), Some(category), Some(difficulty)) = (
        request.question,
        request.answer,
        request.category,
        request.difficulty,
    ) else {
        return Err(error::UNPROCESSABLE);
    };

    let Some(category) = categories::Entity::find_by_id(category)
        .one(state.db())
        .await?
    else {
        return Err(error::UNPROCESSABLE);
    };

    let model = questions::ActiveModel {
        question: Set(question),
        answer: Set(answer),
        category: Set(category.id),
        difficulty: Set(difficulty),
        ..Default::default()
    };

    let res = questions::Entity::insert(model).exec(state.db()).await?;

    info!(id = res.last_insert_id, category = category.id, "created question");

    let select = questions::Entity::find().order_by_asc(questions::Column::Id);
    let Paginated { questions, total } = paginate(state.db(), select, page).await?;

    Ok(Json(Response {
        success: true,
        questions,
        total_questions: total,
        current_category: Some(category.id),
    }))
}

/// Case-insensitive substring pattern, `%` and `_` in the term match literally.
fn contains(term: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');

    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }

    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}
