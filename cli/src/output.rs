//! Output formatting

use clap::ValueEnum;
use colored::Colorize;
use opendlp_client::{report, InspectionOutcome, Likelihood};
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text findings report
    Text,
    Table,
    Json,
    Yaml,
}

#[derive(Tabled)]
struct FindingRow {
    #[tabled(rename = "Quote")]
    quote: String,
    #[tabled(rename = "Info type")]
    info_type: String,
    #[tabled(rename = "Likelihood")]
    likelihood: String,
}

impl OutputFormat {
    pub fn print(&self, outcome: &InspectionOutcome) -> Result<(), String> {
        match self {
            OutputFormat::Text => {
                report::print_findings(outcome).map_err(|e| e.to_string())?;
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(outcome).map_err(|e| e.to_string())?
                );
            }
            OutputFormat::Yaml => {
                println!(
                    "{}",
                    serde_yaml::to_string(outcome).map_err(|e| e.to_string())?
                );
            }
            OutputFormat::Table => {
                let rows: Vec<FindingRow> = outcome
                    .findings()
                    .iter()
                    .map(|f| FindingRow {
                        quote: f.quote.clone(),
                        info_type: f.info_type.name.clone(),
                        likelihood: colorize_likelihood(f.likelihood),
                    })
                    .collect();
                println!("{}", Table::new(rows));
                println!("Findings: {}", outcome.finding_count());
            }
        }
        Ok(())
    }
}

fn colorize_likelihood(likelihood: Likelihood) -> String {
    let name = likelihood.as_str();
    match likelihood {
        Likelihood::VeryLikely => name.red().to_string(),
        Likelihood::Likely => name.yellow().to_string(),
        Likelihood::Possible => name.cyan().to_string(),
        _ => name.to_string(),
    }
}
