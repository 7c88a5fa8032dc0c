pub mod health;
pub mod post;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .service(post::list_posts)
        .service(post::new_post_form)
        .service(post::create_post)
        .service(post::get_post);
}
