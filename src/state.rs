use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};
use std::sync::Arc;
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + Clone;
    type Rand: Rng + Send;

    fn db(&self) -> &Self::Db;
    fn rng(&self) -> Self::Rand;
}

pub struct State {
    database: DbConn,
}

impl State {
    pub async fn new(database_url: &str) -> Result<Arc<Self>, DbErr> {
        Ok(Self::with_database(
            Self::connect_database(database_url).await?,
        ))
    }

    pub fn with_database(conn: DbConn) -> Arc<Self> {
        Arc::new(Self { database: conn })
    }

    async fn connect_database(url: &str) -> Result<DbConn, DbErr> {
        info!("Trying to connect to database");

        let mut opts = ConnectOptions::new(url.to_owned());
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts).await?;

        info!("Connected to database");

        Ok(db)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;
    type Rand = ChaCha8Rng;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn rng(&self) -> Self::Rand {
        // non-cryptographic, seeded from the thread-local generator
        ChaCha8Rng::from_seed(rand::thread_rng().gen())
    }
}
