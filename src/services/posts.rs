use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    flash::Notice,
    models::posts::PostForm,
    repositories::posts_repo::PostsRepository,
    views::View,
    Error,
};

pub const LIST_PATH: &str = "/posts";

/// What a request ends in: a page rendered in place, or a redirect back to
/// the list carrying a flash notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render { view: View, notice: Option<Notice> },
    Redirect { to: &'static str, notice: Notice },
}

impl Outcome {
    fn render(view: View) -> Self {
        Self::Render { view, notice: None }
    }

    fn render_with(view: View, notice: Notice) -> Self {
        Self::Render {
            view,
            notice: Some(notice),
        }
    }

    fn back_to_list(notice: Notice) -> Self {
        Self::Redirect {
            to: LIST_PATH,
            notice,
        }
    }
}

#[derive(Clone)]
pub struct PostsService {
    repo: Arc<dyn PostsRepository>,
}

impl PostsService {
    pub fn new(repo: Arc<dyn PostsRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Outcome {
        match self.repo.list_posts().await {
            Ok(data) => Outcome::render(View::List { data }),
            Err(_) => Outcome::render_with(
                View::List { data: Vec::new() },
                Notice::error("Failed to load posts."),
            ),
        }
    }

    pub fn create_form(&self) -> Outcome {
        Outcome::render(View::Create {
            title: String::new(),
            content: String::new(),
        })
    }

    pub async fn store(&self, form: PostForm) -> Outcome {
        if let Err(err) = form.check() {
            debug!("Rejected new post: {}", err);
            return Outcome::render_with(
                View::Create {
                    title: form.title,
                    content: form.content,
                },
                Notice::error(err.to_string()),
            );
        }

        match self.repo.create_post(&form.title, &form.content).await {
            Ok(id) => {
                info!(post_id = id, "Post created");
                Outcome::back_to_list(Notice::success("Post saved successfully!"))
            }
            Err(_) => Outcome::render_with(
                View::Create {
                    title: form.title,
                    content: form.content,
                },
                Notice::error("Failed to save the post."),
            ),
        }
    }

    /// `raw_id` is the path segment as received; one that is not an integer
    /// cannot match any row.
    pub async fn edit_form(&self, raw_id: &str) -> Outcome {
        let Ok(id) = raw_id.parse::<i64>() else {
            return not_found(raw_id);
        };

        match self.repo.get_post(id).await {
            Ok(Some(post)) => Outcome::render(View::Edit {
                id: post.id.to_string(),
                title: post.title,
                content: post.content,
            }),
            Ok(None) => not_found(raw_id),
            Err(_) => Outcome::back_to_list(Notice::error("Failed to load the post for editing.")),
        }
    }

    /// Reports success even when no row matched, including ids that are not
    /// integers.
    pub async fn update(&self, raw_id: &str, form: PostForm) -> Outcome {
        if let Err(err) = form.check() {
            debug!(post_id = raw_id, "Rejected post update: {}", err);
            return Outcome::render_with(
                View::Edit {
                    id: raw_id.to_string(),
                    title: form.title,
                    content: form.content,
                },
                Notice::error(err.to_string()),
            );
        }

        let affected = match raw_id.parse::<i64>() {
            Ok(id) => self.repo.update_post(id, &form.title, &form.content).await,
            Err(_) => Ok(0),
        };

        match affected {
            Ok(affected) => {
                info!(post_id = raw_id, affected, "Post updated");
                Outcome::back_to_list(Notice::success("Post updated successfully!"))
            }
            Err(_) => Outcome::render_with(
                View::Edit {
                    id: raw_id.to_string(),
                    title: form.title,
                    content: form.content,
                },
                Notice::error("Failed to update the post."),
            ),
        }
    }

    pub async fn delete(&self, raw_id: &str) -> Outcome {
        let affected = match raw_id.parse::<i64>() {
            Ok(id) => self.repo.delete_post(id).await,
            Err(_) => Ok(0),
        };

        match affected {
            Ok(affected) => {
                info!(post_id = raw_id, affected, "Post deleted");
                Outcome::back_to_list(Notice::success("Post deleted successfully!"))
            }
            Err(_) => Outcome::back_to_list(Notice::error("Failed to delete the post.")),
        }
    }
}

// Longest id echoed back, keeping the flash cookie well under browser limits.
const MAX_ECHOED_ID_CHARS: usize = 64;

fn not_found(raw_id: &str) -> Outcome {
    let mut shown: String = raw_id.chars().take(MAX_ECHOED_ID_CHARS).collect();
    if shown.len() < raw_id.len() {
        shown.push_str("...");
    }
    Outcome::back_to_list(Notice::error(Error::PostNotFound(shown).to_string()))
}
