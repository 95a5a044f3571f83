#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;
mod extractors;
mod handlers;
mod middlewares;
mod state;
mod utils;

pub use config::Config;
use error::Error;
pub use state::*;
use tokio::net::TcpListener;
pub use utils::panic;

pub async fn run<S: StateTrait>(listener: TcpListener, state: S) -> anyhow::Result<()> {
    info!("listening on {}", listener.local_addr()?);

    let app = middlewares::middlewares(state, handlers::routes::<S>());

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(utils::shutdown_signal())
        .await?;

    Ok(())
}
