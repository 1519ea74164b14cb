use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;
use env_logger::Env;

mod config;
mod spa;

use config::ServerConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;
    if !config.index_file().is_file() {
        log::warn!(
            "{} is missing; build the ui with `trunk build` first",
            config.index_file().display()
        );
    }
    log::info!(
        "serving {} on http://{}:{}",
        config.dist_dir.display(),
        config.host,
        config.port
    );

    let bind = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| spa::configure(cfg, &config))
    })
    .bind(bind.clone())
    .with_context(|| format!("bind {}:{}", bind.0, bind.1))?
    .run()
    .await
    .context("http server")
}
