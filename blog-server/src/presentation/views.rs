use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use askama::Template;

use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub posts: &'a [Post],
}

#[derive(Template)]
#[template(path = "new.html")]
pub struct NewPostTemplate;

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate<'a> {
    pub post: &'a Post,
}

pub fn render_html<T: Template>(template: T) -> Result<HttpResponse, DomainError> {
    let html = template.render()?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}
