use crate::domain::post::NewPost;
use serde::Deserialize;

/// Body of `POST /new`. Absent fields arrive as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewPostForm {
    pub title: String,
    pub image: String,
    pub body: String,
}

impl From<NewPostForm> for NewPost {
    fn from(form: NewPostForm) -> Self {
        NewPost {
            title: form.title,
            image: form.image,
            body: form.body,
        }
    }
}
