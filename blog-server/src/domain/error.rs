use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;
use tracing::error;

pub const POST_NOT_FOUND_BODY: &str = "Post not found";

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("failed to read posts: {0}")]
    StorageRead(String),
    #[error("failed to write posts: {0}")]
    StorageWrite(String),
    #[error("post not found: {0}")]
    PostNotFound(String),
    #[error("template rendering failed: {0}")]
    Render(String),
}

impl From<askama::Error> for DomainError {
    fn from(err: askama::Error) -> Self {
        DomainError::Render(err.to_string())
    }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::PostNotFound(_) => StatusCode::NOT_FOUND,
            DomainError::StorageRead(_)
            | DomainError::StorageWrite(_)
            | DomainError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            DomainError::PostNotFound(_) => POST_NOT_FOUND_BODY,
            _ => {
                error!(error = %self, "request failed");
                "Internal Server Error"
            }
        };
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn not_found_is_plain_text() {
        let resp = DomainError::PostNotFound("42".into()).error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body, POST_NOT_FOUND_BODY);
    }

    #[actix_web::test]
    async fn storage_failures_hide_details() {
        let resp =
            DomainError::StorageRead("data/posts.json: expected value".into()).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body, "Internal Server Error");
    }
}
