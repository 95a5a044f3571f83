use super::category_map;
use crate::{
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::State;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct Response {
    success: bool,
    categories: BTreeMap<i32, String>,
}

pub async fn list_categories<S: StateTrait>(State(state): State<S>) -> Result<Json<Response>> {
    let categories = category_map(state.db()).await?;

    if categories.is_empty() {
        return Err(error::RESOURCE_NOT_FOUND);
    }

    Ok(Json(Response {
        success: true,
        categories,
    }))
}
