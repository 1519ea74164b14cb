use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::web;

use crate::config::ServerConfig;

/// `/assets` first, then the bundle at `/`; anything the bundle lacks gets
/// `index.html` so client-side routes survive a reload.
pub fn configure(cfg: &mut web::ServiceConfig, config: &ServerConfig) {
    let index = config.index_file();

    cfg.service(Files::new("/assets", &config.assets_dir))
        .service(
            Files::new("/", &config.dist_dir)
                .index_file("index.html")
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        log::debug!("spa fallback for {}", req.path());
                        let file = NamedFile::open_async(&index).await?;
                        let res = file.into_response(&req);
                        Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
                    }
                })),
        );
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    use super::*;

    const INDEX: &str = "<!DOCTYPE html><title>hunt</title>";

    fn fixture(root: &Path) -> ServerConfig {
        let dist = root.join("dist");
        let assets = root.join("assets");
        fs::create_dir_all(&dist).unwrap();
        fs::create_dir_all(&assets).unwrap();
        fs::write(dist.join("index.html"), INDEX).unwrap();
        fs::write(dist.join("hunt_ui.js"), "export default 1;").unwrap();
        fs::write(assets.join("map.svg"), "<svg/>").unwrap();

        ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            dist_dir: dist,
            assets_dir: assets,
        }
    }

    async fn get(config: &ServerConfig, uri: &str) -> (StatusCode, String) {
        let app = test::init_service(App::new().configure(|cfg| configure(cfg, config))).await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = res.status();
        let body = test::read_body(res).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());
        assert_eq!(get(&config, "/").await, (StatusCode::OK, INDEX.to_owned()));
    }

    #[actix_web::test]
    async fn bundle_files_are_served() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());
        let (status, body) = get(&config, "/hunt_ui.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "export default 1;");
    }

    #[actix_web::test]
    async fn assets_are_served() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());
        assert_eq!(get(&config, "/assets/map.svg").await, (StatusCode::OK, "<svg/>".to_owned()));
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());
        assert_eq!(get(&config, "/no/such/page").await, (StatusCode::OK, INDEX.to_owned()));
    }

    #[actix_web::test]
    async fn missing_index_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());
        fs::remove_file(config.index_file()).unwrap();

        let app = test::init_service(App::new().configure(|cfg| configure(cfg, &config))).await;
        let req = test::TestRequest::get().uri("/elsewhere").to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(err.as_response_error().status_code(), StatusCode::NOT_FOUND);
    }
}
