use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile entity - display data, 1:1 with a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: Uuid,
    pub full_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl Profile {
    /// Create a profile for a user, empty bio and avatar.
    pub fn new(user_id: Uuid, full_name: String) -> Self {
        Self {
            user_id,
            full_name,
            bio: None,
            avatar_url: None,
        }
    }
}
