//! Inspect command

use crate::config::Config;
use crate::output::OutputFormat;
use clap::Args;
use opendlp_client::{InspectRequestBuilder, InspectService, Inspector, Likelihood};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Project that owns the inspection quota
    #[arg(long, env = "OPENDLP_PROJECT")]
    pub project: Option<String>,

    /// Text to inspect
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// File whose contents to inspect
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Substring to exclude from findings (repeatable)
    #[arg(long = "exclude", value_name = "WORD")]
    pub excluded: Vec<String>,

    /// Override the detection categories (repeatable)
    #[arg(long = "info-type", value_name = "NAME")]
    pub info_types: Vec<String>,

    /// Only report findings at or above this likelihood
    #[arg(long)]
    pub min_likelihood: Option<String>,
}

impl InspectArgs {
    /// Request configuration derived from the flags
    pub fn request_builder(&self) -> Result<InspectRequestBuilder, String> {
        let mut builder = InspectRequestBuilder::new();
        if !self.info_types.is_empty() {
            builder = builder.info_types(self.info_types.clone());
        }
        if let Some(raw) = &self.min_likelihood {
            let likelihood: Likelihood = raw.parse()?;
            builder = builder.min_likelihood(likelihood);
        }
        Ok(builder)
    }

    fn text(&self) -> Result<String, String> {
        match (&self.text, &self.file) {
            (Some(text), None) => Ok(text.clone()),
            (None, Some(path)) => fs::read_to_string(path).map_err(|e| e.to_string()),
            _ => Err("provide exactly one of --text or --file".to_string()),
        }
    }
}

pub async fn handle<S: InspectService>(
    args: InspectArgs,
    inspector: &Inspector<S>,
    config: &Config,
    format: OutputFormat,
) -> Result<(), String> {
    let project = args
        .project
        .clone()
        .or_else(|| config.project.clone())
        .ok_or("no project configured; pass --project or run `opendlp config set project`")?;
    let text = args.text()?;

    let outcome = inspector
        .inspect(&project, &text, &args.excluded)
        .await
        .map_err(|e| e.to_string())?;

    format.print(&outcome)
}
