//! Static site endpoints: blog queries, robots.txt and the RSS feed

pub mod blog;
mod feed;
mod robots;

pub use blog::{load_posts, reading_time, Blog, BlogPost, PostSource};
pub use feed::RssFeed;
pub use robots::{no_index_from_env, robots_txt, NOINDEX_ENV};
