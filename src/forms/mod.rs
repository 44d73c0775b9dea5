//! Form-submission layer
//!
//! Resolves a form's backend configuration, dispatches to the matching
//! backend adapter and normalizes every outcome into a [`SubmissionResult`].

pub mod adapters;
mod config;
mod dispatcher;
mod types;

pub use adapters::FormAdapter;
pub use config::{resolve, FormsConfig, FormsOverrides, ResolvedFormConfig};
pub use dispatcher::FormSubmitter;
pub use types::{Backend, FormFieldData, SubmissionResult, SubmitError};
