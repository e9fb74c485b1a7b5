use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use std::io;

mod auth;
mod config;
mod db;
mod error;
mod models;
mod state;
mod user_handlers;
mod views;

use config::AppConfig;
use db::CredentialStore;
use state::AppState;
use views::Theme;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let store = CredentialStore::new(config.database_path.clone());
    store
        .init_schema()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    info!("Credential store ready at {}", store.path().display());

    let state = web::Data::new(AppState::new(store, &Theme::ARC));
    let addr = config.bind_addr();
    info!("Listening on: http://{}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(user_handlers::configure)
    })
    .bind(addr)?
    .run()
    .await
}
