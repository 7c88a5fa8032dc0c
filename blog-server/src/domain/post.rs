use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub image: String,
    pub body: String,
    pub date: String,
}

/// Fields of a post as submitted, before an id and date are assigned.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub image: String,
    pub body: String,
}

impl Post {
    pub fn new(id: String, draft: NewPost) -> Self {
        Self {
            id,
            title: draft.title,
            image: draft.image,
            body: draft.body,
            date: display_date(Local::now()),
        }
    }
}

/// Short numeric date, e.g. `7/4/2025`.
pub fn display_date(at: DateTime<Local>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}
