use crate::application::post_service::PostService;
use crate::data::post_repository::JsonFilePostRepository;
use crate::domain::error::DomainError;
use crate::presentation::dto::NewPostForm;
use crate::presentation::utils::request_id;
use crate::presentation::views::{IndexTemplate, NewPostTemplate, PostTemplate, render_html};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::info;

type Posts = web::Data<PostService<JsonFilePostRepository>>;

#[get("/")]
pub async fn list_posts(req: HttpRequest, posts: Posts) -> Result<HttpResponse, DomainError> {
    let posts = posts.list_posts().await?;

    info!(
        request_id = %request_id(&req),
        count = posts.len(),
        "posts listed"
    );

    render_html(IndexTemplate { posts: &posts })
}

#[get("/new")]
pub async fn new_post_form() -> Result<HttpResponse, DomainError> {
    render_html(NewPostTemplate)
}

#[post("/new")]
pub async fn create_post(
    req: HttpRequest,
    posts: Posts,
    form: web::Form<NewPostForm>,
) -> Result<HttpResponse, DomainError> {
    let post = posts.create_post(form.into_inner().into()).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post.id,
        "post submitted"
    );

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish())
}

#[get("/post/{id}")]
pub async fn get_post(
    req: HttpRequest,
    posts: Posts,
    path: web::Path<String>,
) -> Result<HttpResponse, DomainError> {
    let id = path.into_inner();
    let post = posts.get_post(&id).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post.id,
        "post retrieved"
    );

    render_html(PostTemplate { post: &post })
}
