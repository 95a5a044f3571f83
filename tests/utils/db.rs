use entity::{categories, questions};
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DbConn, EntityTrait, PaginatorTrait, Set};
use tracing::log::LevelFilter;

/// A fresh, migrated in-memory database.
pub async fn setup() -> DbConn {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    // every connection would get its own empty database
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging_level(LevelFilter::Debug);

    let conn = Database::connect(opts)
        .await
        .expect("failed to connect to database");

    migration::Migrator::up(&conn, None)
        .await
        .expect("failed to apply migrations");

    conn
}

pub async fn insert_category(conn: &DbConn, kind: &str) -> i32 {
    let model = categories::ActiveModel {
        kind: Set(kind.to_owned()),
        ..Default::default()
    };

    categories::Entity::insert(model)
        .exec(conn)
        .await
        .expect("failed to insert category")
        .last_insert_id
}

pub async fn insert_question(
    conn: &DbConn,
    question: &str,
    answer: &str,
    category: i32,
    difficulty: i32,
) -> i32 {
    let model = questions::ActiveModel {
        question: Set(question.to_owned()),
        answer: Set(answer.to_owned()),
        category: Set(category),
        difficulty: Set(difficulty),
        ..Default::default()
    };

    questions::Entity::insert(model)
        .exec(conn)
        .await
        .expect("failed to insert question")
        .last_insert_id
}

pub async fn find_question(conn: &DbConn, id: i32) -> Option<questions::Model> {
    questions::Entity::find_by_id(id)
        .one(conn)
        .await
        .expect("failed to query question")
}

pub async fn count_questions(conn: &DbConn) -> u64 {
    questions::Entity::find()
        .count(conn)
        .await
        .expect("failed to count questions")
}
