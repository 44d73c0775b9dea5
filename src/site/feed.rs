//! RSS feed for published blog posts

use rss::{Category, Channel, ChannelBuilder, Item, ItemBuilder};
use tracing::debug;

use super::blog::BlogPost;
use crate::config::SiteConfig;

const FEED_LANGUAGE: &str = "en-us";

/// RSS 2.0 feed built from site settings and published posts
#[derive(Debug, Clone)]
pub struct RssFeed {
    channel: Channel,
}

impl RssFeed {
    /// Build the feed.
    ///
    /// Returns `None` when the `rss` feature is off. With the blog disabled
    /// the feed is still served, just without items.
    pub fn generate(site: &SiteConfig, posts: &[BlogPost]) -> Option<Self> {
        if !site.features.rss {
            return None;
        }

        let channel = if site.features.blog {
            debug!(count = posts.len(), "generating RSS feed");
            let items: Vec<Item> = posts.iter().map(|post| post_to_item(site, post)).collect();
            ChannelBuilder::default()
                .title(format!("{} - Blog", site.name))
                .link(site.url.clone())
                .description(site.tagline.clone())
                .language(Some(FEED_LANGUAGE.to_string()))
                .items(items)
                .build()
        } else {
            ChannelBuilder::default()
                .title(site.name.clone())
                .link(site.url.clone())
                .description(site.tagline.clone())
                .build()
        };

        Some(Self { channel })
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Serialized XML document
    pub fn to_xml(&self) -> String {
        self.channel.to_string()
    }
}

fn post_to_item(site: &SiteConfig, post: &BlogPost) -> Item {
    let categories: Vec<Category> = post
        .tags
        .iter()
        .map(|tag| Category {
            name: tag.clone(),
            domain: None,
        })
        .collect();

    ItemBuilder::default()
        .title(Some(post.title.clone()))
        .description(Some(post.description.clone()))
        .link(Some(format!("{}/blog/{}", site.url, post.id)))
        .pub_date(Some(post.published_at.to_rfc2822()))
        .author(Some(post.author.clone()))
        .categories(categories)
        .build()
}
