use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use entity::questions;
use sea_orm::{ConnectionTrait, DbErr, PaginatorTrait, QuerySelect, Select};
use serde::Deserialize;
use std::convert::Infallible;

pub const QUESTIONS_PER_PAGE: u64 = 10;

/// 1-based page number taken from the `page` query parameter.
///
/// A missing or non-numeric value means the first page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    #[inline]
    pub const fn new(number: i64) -> Self {
        Self(number)
    }

    /// Number of rows before the page, `None` if the page can not hold any rows.
    pub fn offset(self) -> Option<u64> {
        let index = u64::try_from(self.0).ok()?.checked_sub(1)?;
        index.checked_mul(QUESTIONS_PER_PAGE)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let page = Query::<PageQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(query)| query.page)
            .and_then(|page| page.trim().parse().ok())
            .map(Page)
            .unwrap_or_default();

        Ok(page)
    }
}

#[derive(Debug)]
pub struct Paginated {
    pub questions: Vec<questions::Model>,
    pub total: u64,
}

/// Runs `select` for one page, counting every row it matches.
///
/// `select` must already be ordered.
pub async fn paginate<C>(
    db: &C,
    select: Select<questions::Entity>,
    page: Page,
) -> Result<Paginated, DbErr>
where
    C: ConnectionTrait,
{
    let total = select.clone().count(db).await?;

    let questions = match page.offset() {
        Some(offset) if offset < total => {
            select
                .offset(offset)
                .limit(QUESTIONS_PER_PAGE)
                .all(db)
                .await?
        }
        _ => Vec::new(),
    };

    Ok(Paginated { questions, total })
}
