use std::sync::Arc;

use crate::data::post_repository::PostRepository;
use crate::domain::{
    error::DomainError,
    post::{NewPost, Post},
};
use tokio::sync::Mutex;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct PostService<R: PostRepository + 'static> {
    repo: Arc<R>,
    // Held across the load/save pair of a submission so concurrent writers
    // in this process cannot drop each other's posts.
    write_lock: Arc<Mutex<()>>,
}

impl<R> PostService<R>
where
    R: PostRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.load_all().await
    }

    pub async fn get_post(&self, id: &str) -> Result<Post, DomainError> {
        self.repo
            .load_all()
            .await?
            .into_iter()
            .find(|post| post.id == id)
            .ok_or_else(|| DomainError::PostNotFound(id.to_owned()))
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_post(&self, draft: NewPost) -> Result<Post, DomainError> {
        let _guard = self.write_lock.lock().await;

        let post = Post::new(self.repo.create_id(), draft);
        let mut posts = self.repo.load_all().await?;
        posts.insert(0, post.clone());
        self.repo.save_all(&posts).await?;

        info!(post_id = %post.id, total = posts.len(), "post created");
        Ok(post)
    }
}
