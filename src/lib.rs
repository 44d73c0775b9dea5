//! site-forms
//!
//! Form-submission adapters for static marketing sites, plus the small
//! site endpoints (robots.txt, RSS) that share the same configuration.
//!
//! ```no_run
//! use site_forms::forms::{FormFieldData, FormSubmitter, FormsConfig};
//! use site_forms::transport::ReqwestTransport;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let submitter = FormSubmitter::new(FormsConfig::default(), ReqwestTransport::new()?);
//! let data = FormFieldData::from([("email".to_string(), "a@x.com".to_string())]);
//! let result = submitter.submit_form(&data, None).await;
//! println!("{}", serde_json::to_string(&result)?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod forms;
pub mod site;
pub mod transport;

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise each `-v` raises this crate's level
/// from `info` to `debug` and then `trace`.
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let default = match verbose {
        0 => "site_forms=info",
        1 => "site_forms=debug",
        _ => "site_forms=trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
