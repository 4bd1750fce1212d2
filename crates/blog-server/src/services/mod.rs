//! Services sitting between the route handlers and the store.

pub mod person;
pub mod posts;

pub use person::PersonService;
pub use posts::{CreatePostResponse, PostsService};
