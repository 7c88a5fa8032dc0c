//! Files from the public directory, served verbatim.

use std::path::{Component, Path, PathBuf};

use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpResponse, Resource, web};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PublicAssets {
    root: PathBuf,
}

impl PublicAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps a decoded request path onto a file below the root. Directory
    /// requests and anything that could climb out of the root yield `None`.
    fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let candidate = request_path.trim_start_matches('/');
        if candidate.is_empty() || candidate.ends_with('/') {
            return None;
        }

        let relative = Path::new(candidate);
        if !relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
        {
            return None;
        }

        Some(self.root.join(relative))
    }
}

/// Catch-all resource answering GET and HEAD from the public directory.
/// Register it after every other route.
pub fn resource() -> Resource {
    web::resource("/{tail:.*}")
        .route(web::get().to(serve_public))
        .route(web::head().to(serve_public))
        .default_service(web::to(|| async { HttpResponse::NotFound().finish() }))
}

pub async fn serve_public(
    tail: web::Path<String>,
    assets: web::Data<PublicAssets>,
) -> HttpResponse {
    let Some(path) = assets.resolve(&tail) else {
        return HttpResponse::NotFound().finish();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => build_response(&path, bytes),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "static asset not served");
            HttpResponse::NotFound().finish()
        }
    }
}

fn build_response(path: &Path, bytes: Vec<u8>) -> HttpResponse {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let mut response = HttpResponse::Ok();
    if let Ok(value) = HeaderValue::from_str(mime.as_ref()) {
        response.insert_header((header::CONTENT_TYPE, value));
    }
    response.body(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{TestRequest, call_service, init_service, read_body};
    use actix_web::App;
    use actix_web::http::{Method, StatusCode};
    use tempfile::TempDir;

    macro_rules! app {
        ($root:expr) => {
            init_service(
                App::new()
                    .app_data(web::Data::new(PublicAssets::new($root)))
                    .service(resource()),
            )
            .await
        };
    }

    fn public_dir() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let public = dir.path().join("public");
        std::fs::create_dir_all(public.join("css")).unwrap();
        std::fs::write(public.join("css/site.css"), "body{}").unwrap();
        std::fs::write(public.join("my pizza.jpg"), "jpeg").unwrap();
        std::fs::write(dir.path().join("secret.txt"), "hidden").unwrap();
        (dir, public)
    }

    #[test]
    fn resolve_rejects_traversal_and_directories() {
        let assets = PublicAssets::new("/srv/public");

        assert_eq!(
            assets.resolve("/css/style.css"),
            Some(PathBuf::from("/srv/public/css/style.css"))
        );
        assert_eq!(assets.resolve("/"), None);
        assert_eq!(assets.resolve("/css/"), None);
        assert_eq!(assets.resolve("/../secret.txt"), None);
        assert_eq!(assets.resolve("/css/../../secret.txt"), None);
    }

    #[actix_web::test]
    async fn serves_existing_file_with_guessed_type() {
        let (_dir, public) = public_dir();
        let app = app!(&public);

        let resp = call_service(&app, TestRequest::get().uri("/css/site.css").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("content-type").unwrap(), "text/css");
        assert_eq!(read_body(resp).await, "body{}");

        let resp = call_service(&app, TestRequest::get().uri("/missing.png").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn percent_encoded_names_are_decoded() {
        let (_dir, public) = public_dir();
        let app = app!(&public);

        let req = TestRequest::get().uri("/my%20pizza.jpg").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_body(resp).await, "jpeg");
    }

    #[actix_web::test]
    async fn encoded_dot_segments_stay_inside_the_root() {
        let (_dir, public) = public_dir();
        let app = app!(&public);

        let req = TestRequest::get().uri("/%2e%2e/secret.txt").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn only_get_and_head_are_answered() {
        let (_dir, public) = public_dir();
        let app = app!(&public);

        let req = TestRequest::default()
            .method(Method::HEAD)
            .uri("/css/site.css")
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = call_service(&app, TestRequest::post().uri("/css/site.css").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
