//! Domain entities - the core business objects.

mod post;

pub use post::{AuthorName, BlogPost, NewBlogPost, PostChanges};
