//! site-forms CLI
//!
//! Submits forms through the configured backend and renders the site's
//! robots.txt and RSS feed.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use url::Url;

use site_forms::config::AppConfig;
use site_forms::forms::{FormFieldData, FormSubmitter, FormsOverrides};
use site_forms::site::{self, Blog, RssFeed};
use site_forms::transport::ReqwestTransport;

#[derive(Parser)]
#[command(name = "site-forms", version, about = "Static site form submission tools")]
struct Cli {
    /// Path to configuration file (defaults to $SITE_FORMS_CONFIG, then the
    /// platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a form and print the result as JSON
    Submit {
        /// Form field as key=value; repeatable
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
        /// Backend to use instead of the configured default
        #[arg(long)]
        backend: Option<String>,
        #[arg(long)]
        api_url: Option<String>,
        #[arg(long)]
        web3forms_key: Option<String>,
        #[arg(long)]
        formspree_endpoint: Option<String>,
        #[arg(long)]
        formspark_project_id: Option<String>,
        /// Site origin used for relative endpoints (defaults to the site url)
        #[arg(long)]
        origin: Option<Url>,
    },
    /// Print robots.txt
    Robots {
        /// Block all crawlers (defaults to PUBLIC_NOINDEX=true)
        #[arg(long)]
        no_index: bool,
    },
    /// Print the RSS feed for a JSON file of posts
    Rss {
        /// JSON array of blog posts
        #[arg(long)]
        posts: PathBuf,
        /// Drop draft posts
        #[arg(long)]
        production: bool,
    },
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    site_forms::init_tracing(cli.verbose);

    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Submit {
            fields,
            backend,
            api_url,
            web3forms_key,
            formspree_endpoint,
            formspark_project_id,
            origin,
        } => {
            let overrides = FormsOverrides {
                default_backend: backend,
                web3forms_key,
                api_url,
                formspree_endpoint,
                formspar_project_id: formspark_project_id,
                ..Default::default()
            };
            let origin = origin.or_else(|| Url::parse(&config.site.url).ok());
            let ok = submit(&config, fields.into_iter().collect(), overrides, origin).await?;
            if !ok {
                std::process::exit(1);
            }
        }
        Commands::Robots { no_index } => {
            let no_index = no_index || site::no_index_from_env();
            print!("{}", site::robots_txt(&config.site, no_index));
        }
        Commands::Rss { posts, production } => {
            println!("{}", render_feed(&config, &posts, production)?);
        }
    }

    Ok(())
}

async fn submit(
    config: &AppConfig,
    data: FormFieldData,
    overrides: FormsOverrides,
    origin: Option<Url>,
) -> Result<bool> {
    let mut transport = ReqwestTransport::new().context("Failed to build HTTP client")?;
    if let Some(origin) = origin {
        transport = transport.with_origin(origin);
    }

    let submitter = FormSubmitter::new(config.site.forms.clone(), transport);
    let overrides = (overrides != FormsOverrides::default()).then_some(overrides);
    let result = submitter.submit_form(&data, overrides.as_ref()).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(result.is_ok())
}

fn render_feed(config: &AppConfig, posts: &Path, production: bool) -> Result<String> {
    let posts = site::load_posts(posts)?;
    let blog = Blog::published(&posts, production);
    match RssFeed::generate(&config.site, blog.posts()) {
        Some(feed) => Ok(feed.to_xml()),
        None => bail!("RSS feed is disabled"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_submit_parsing() {
        let args = [
            "site-forms",
            "submit",
            "--field",
            "name=Ann",
            "-f",
            "message=a=b",
            "--backend",
            "formspree",
            "--formspree-endpoint",
            "https://formspree.io/f/abc",
        ];
        let cli = Cli::parse_from(args);

        assert!(cli.config.is_none());
        match cli.command {
            Commands::Submit {
                fields,
                backend,
                formspree_endpoint,
                origin,
                ..
            } => {
                assert_eq!(
                    fields,
                    vec![
                        ("name".to_string(), "Ann".to_string()),
                        ("message".to_string(), "a=b".to_string()),
                    ]
                );
                assert_eq!(backend.as_deref(), Some("formspree"));
                assert_eq!(
                    formspree_endpoint.as_deref(),
                    Some("https://formspree.io/f/abc")
                );
                assert!(origin.is_none());
            }
            _ => panic!("Expected Submit command"),
        }
    }

    #[test]
    fn test_cli_rejects_malformed_field() {
        let args = ["site-forms", "submit", "--field", "novalue"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_robots_and_verbosity() {
        let cli = Cli::parse_from([
            "site-forms",
            "-vv",
            "--config",
            "site.json",
            "robots",
            "--no-index",
        ]);

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("site.json")));
        match cli.command {
            Commands::Robots { no_index } => assert!(no_index),
            _ => panic!("Expected Robots command"),
        }
    }

    #[test]
    fn test_cli_rss_parsing() {
        let cli = Cli::parse_from([
            "site-forms",
            "rss",
            "--posts",
            "posts.json",
            "--production",
        ]);

        match cli.command {
            Commands::Rss { posts, production } => {
                assert_eq!(posts, PathBuf::from("posts.json"));
                assert!(production);
            }
            _ => panic!("Expected Rss command"),
        }
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("email=a@x.com"),
            Ok(("email".to_string(), "a@x.com".to_string()))
        );
        assert_eq!(parse_field("empty="), Ok(("empty".to_string(), String::new())));
        assert!(parse_field("=value").is_err());
    }

    #[test]
    fn test_rss_disabled_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(&path, "[]").unwrap();

        let mut config = AppConfig::default();
        config.site.features.rss = false;

        let err = render_feed(&config, &path, true).unwrap_err();
        assert_eq!(err.to_string(), "RSS feed is disabled");
    }

    #[test]
    fn test_rss_renders_published_posts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(
            &path,
            r#"[
                {"id": "live", "title": "Live", "description": "d", "publishedAt": "2024-01-02T00:00:00Z", "author": "a"},
                {"id": "wip", "title": "WIP", "description": "d", "publishedAt": "2024-01-03T00:00:00Z", "author": "a", "draft": true}
            ]"#,
        )
        .unwrap();

        let xml = render_feed(&AppConfig::default(), &path, true).unwrap();

        assert!(xml.contains("/blog/live"));
        assert!(!xml.contains("/blog/wip"));
    }
}
