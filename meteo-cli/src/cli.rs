use clap::Parser;
use log::debug;
use meteo_core::{OpenMeteoClient, WeatherQuery};
use serde_json::json;
use std::io::Read;
use std::process::ExitCode;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Open-Meteo weather summary")]
pub struct Cli {
    /// JSON payload with `location` or (`latitude`, `longitude`).
    /// Read from stdin when omitted.
    pub payload: Option<String>,
}

impl Cli {
    /// Run the pipeline and print exactly one line of compact JSON: the
    /// summary on success, `{"error": "..."}` on any failure.
    pub async fn run(self) -> ExitCode {
        let (line, code) = report(self.fetch().await);
        println!("{line}");
        code
    }

    async fn fetch(self) -> anyhow::Result<String> {
        let raw = match self.payload {
            Some(raw) => raw,
            None => {
                debug!("no payload argument, reading stdin");
                read_stdin()?
            }
        };

        let query = WeatherQuery::from_json(&raw)?;
        let client = OpenMeteoClient::new();
        let summary = meteo_core::fetch_summary(&client, &query).await?;

        Ok(serde_json::to_string(&summary)?)
    }
}

/// Map the pipeline result to the single stdout line and the process exit
/// code. Failures of any origin collapse to the error object and exit 1.
fn report(result: anyhow::Result<String>) -> (String, ExitCode) {
    match result {
        Ok(line) => (line, ExitCode::SUCCESS),
        Err(err) => (
            json!({ "error": err.to_string() }).to_string(),
            ExitCode::FAILURE,
        ),
    }
}

fn read_stdin() -> std::io::Result<String> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    Ok(raw)
}
