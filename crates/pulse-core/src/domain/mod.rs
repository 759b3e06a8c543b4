//! Domain entities and read models.

mod analytics;
mod engagement;
mod post;
mod user;

pub use analytics::{
    ActivityEntry, EngagementGroup, EngagementStats, OverallStats, PostWithAuthor, RankedUser,
    TopPost, UserEngagement,
};
pub use engagement::{Comment, Like, LikeKey, NewComment};
pub use post::{NewPost, Post};
pub use user::{NewUser, User};
