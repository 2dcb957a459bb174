use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Like - a (post, user) pair. Uniqueness is enforced at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub post_id: Uuid,
    pub user_id: Uuid,
}

impl Like {
    pub fn new(post_id: Uuid, user_id: Uuid) -> Self {
        Self { post_id, user_id }
    }
}
