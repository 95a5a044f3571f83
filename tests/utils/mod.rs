pub mod db;
pub mod macros;
pub mod prelude;
mod request;
mod response;

use request::RequestBuilder;
use reqwest::Client;
use sea_orm::DbConn;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use trivia_backend::State;

/// A server bound to an ephemeral port, backed by its own in-memory database.
#[derive(Clone, Debug)]
pub struct App {
    addr: SocketAddr,
    client: Client,
    db: DbConn,
}

/// Ids of the rows inserted by [`App::seed`].
#[allow(unused)]
#[derive(Debug)]
pub struct Seed {
    pub science: i32,
    pub art: i32,
    pub geography: i32,
    pub history: i32,
    pub entertainment: i32,
    pub sports: i32,
    pub questions: Vec<i32>,
}

#[allow(unused)]
impl App {
    pub async fn new() -> Self {
        let db = db::setup().await;

        let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, 0));
        let listener = TcpListener::bind(addr)
            .await
            .expect("failed to bind tcp listener");
        let addr = listener.local_addr().unwrap();

        let state = State::with_database(db.clone());

        tokio::spawn(async move {
            trivia_backend::run(listener, state).await.unwrap();
        });

        App {
            addr,
            client: Client::new(),
            db,
        }
    }

    pub fn db(&self) -> &DbConn {
        &self.db
    }

    /// Six categories and twelve questions, two per category.
    pub async fn seed(&self) -> Seed {
        let science = db::insert_category(&self.db, "Science").await;
        let art = db::insert_category(&self.db, "Art").await;
        let geography = db::insert_category(&self.db, "Geography").await;
        let history = db::insert_category(&self.db, "History").await;
        let entertainment = db::insert_category(&self.db, "Entertainment").await;
        let sports = db::insert_category(&self.db, "Sports").await;

        let rows = [
            (
                "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
                "Maya Angelou",
                history,
                2,
            ),
            (
                "What boxer's original name is Cassius Clay?",
                "Muhammad Ali",
                history,
                1,
            ),
            (
                "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
                "Apollo 13",
                entertainment,
                4,
            ),
            (
                "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
                "Tom Cruise",
                entertainment,
                4,
            ),
            (
                "Which is the only team to play in every soccer World Cup tournament?",
                "Brazil",
                sports,
                3,
            ),
            (
                "Which country won the first ever soccer World Cup in 1930?",
                "Uruguay",
                sports,
                4,
            ),
            ("What is the largest lake in Africa?", "Lake Victoria", geography, 2),
            (
                "The Taj Mahal is located in which Indian city?",
                "Agra",
                geography,
                2,
            ),
            (
                "Which Dutch graphic artist, initials M C, was a creator of optical illusions?",
                "Escher",
                art,
                1,
            ),
            ("La Giaconda is better known as what?", "Mona Lisa", art, 3),
            (
                "What is the heaviest organ in the human body?",
                "The Liver",
                science,
                4,
            ),
            ("Who discovered penicillin?", "Alexander Fleming", science, 3),
        ];

        let mut questions = Vec::with_capacity(rows.len());

        for (question, answer, category, difficulty) in rows {
            questions
                .push(db::insert_question(&self.db, question, answer, category, difficulty).await);
        }

        Seed {
            science,
            art,
            geography,
            history,
            entertainment,
            sports,
            questions,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.url(path)))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.url(path)))
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.put(self.url(path)))
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(self.url(path)))
    }

    pub fn options(&self, path: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.request(reqwest::Method::OPTIONS, self.url(path)))
    }
}
