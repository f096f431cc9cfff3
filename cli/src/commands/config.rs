//! Config commands

use crate::config::Config;
use crate::ConfigCommands;

fn masked(token: &str) -> String {
    format!("{}****", &token[..8.min(token.len())])
}

pub async fn handle(action: ConfigCommands) -> Result<(), String> {
    match action {
        ConfigCommands::Init => {
            let config = Config::default();
            config.save()?;
            println!("Configuration initialized at ~/.opendlp/config.toml");
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load(None).unwrap_or_default();
            match key.as_str() {
                "access_token" => config.access_token = Some(value),
                "project" => config.project = Some(value),
                "api_url" => config.api_url = Some(value),
                "default_format" => config.default_format = Some(value),
                _ => return Err(format!("Unknown config key: {}", key)),
            }
            config.save()?;
            println!("Set {} successfully", key);
        }
        ConfigCommands::Get { key } => {
            let config = Config::load(None).unwrap_or_default();
            let value = match key.as_str() {
                "access_token" => config.access_token.map(|t| masked(&t)),
                "project" => config.project,
                "api_url" => config.api_url,
                "default_format" => config.default_format,
                _ => return Err(format!("Unknown config key: {}", key)),
            };
            println!("{}: {}", key, value.unwrap_or_else(|| "(not set)".into()));
        }
        ConfigCommands::List => {
            let config = Config::load(None).unwrap_or_default();
            println!(
                "api_url: {}",
                config.api_url.unwrap_or_else(|| "(not set)".into())
            );
            println!(
                "project: {}",
                config.project.unwrap_or_else(|| "(not set)".into())
            );
            println!(
                "access_token: {}",
                config
                    .access_token
                    .map(|t| masked(&t))
                    .unwrap_or_else(|| "(not set)".into())
            );
            println!(
                "default_format: {}",
                config.default_format.unwrap_or_else(|| "(not set)".into())
            );
        }
    }
    Ok(())
}
