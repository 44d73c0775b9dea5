//! robots.txt generation

use crate::config::SiteConfig;

/// Environment variable that blocks all indexing when set to `true`
pub const NOINDEX_ENV: &str = "PUBLIC_NOINDEX";

/// Whether the environment asks for a non-indexable build (staging, previews)
pub fn no_index_from_env() -> bool {
    std::env::var(NOINDEX_ENV).is_ok_and(|value| value == "true")
}

/// Render robots.txt for the site
pub fn robots_txt(site: &SiteConfig, no_index: bool) -> String {
    if no_index {
        return "# This site is not intended for public indexing.\n\
                User-agent: *\n\
                Disallow: /\n"
            .to_string();
    }

    format!(
        "User-agent: *\n\
         Allow: /\n\
         \n\
         # Exclude demo and utility paths from crawling\n\
         Disallow: /demo/\n\
         Disallow: /thank-you\n\
         \n\
         Sitemap: {}/sitemap-index.xml\n",
        site.url
    )
}
