//! Domain entities - the core business objects.

mod comment;
mod like;
mod post;
mod profile;
mod user;

pub use comment::Comment;
pub use like::Like;
pub use post::Post;
pub use profile::Profile;
pub use user::{Role, User, VerificationStatus};
