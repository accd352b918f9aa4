#[macro_use]
extern crate log;
#[macro_use]
extern crate validator_derive;

use std::io;

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

mod config;
mod routes;
mod service;
mod startup;
mod state;
#[cfg(test)]
mod tests;
mod validate;

use crate::config::Config;
use crate::routes::routes;
use crate::startup::init_state;

fn cors(client_host: &Option<String>) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
        .max_age(3600);

    match client_host {
        Some(origin) => cors.allowed_origin(origin),
        None => cors.allow_any_origin(),
    }
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;

    let state = init_state(&config)?;

    let (host, port) = config.bind_address();
    info!("Server starting on {}:{}", host, port);

    let client_host = config.client_host.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors(&client_host))
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(routes)
            .default_service(web::route().to(routes::not_found))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
