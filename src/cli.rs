use crate::config::{self, Config};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use geocsv_application::pipeline::{Pipeline, Settings};
use geocsv_core::usecases::UnmatchedPolicy;
use geocsv_gateways::{
    geocoding::ban::Ban,
    host::{geojson::GeoJsonFile, terminal::TerminalHost},
};
use std::{path::PathBuf, process::ExitCode};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// CSV file with an 'adresse' column (asked for interactively if omitted)
    #[arg(value_name = "CSV_FILE")]
    input: Option<PathBuf>,

    /// Configuration file
    #[arg(long = "config", value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// GeoJSON file for the resulting point layer
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Where to store the normalized copy of the input
    #[arg(long, value_name = "FILE")]
    normalized_file: Option<PathBuf>,

    /// Name of the resulting layer
    #[arg(long)]
    layer_name: Option<String>,

    /// What to do with addresses that could not be resolved
    #[arg(long, value_enum)]
    unmatched: Option<Unmatched>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Unmatched {
    Drop,
    Placeholder,
}

impl From<Unmatched> for UnmatchedPolicy {
    fn from(from: Unmatched) -> Self {
        match from {
            Unmatched::Drop => Self::Drop,
            Unmatched::Placeholder => Self::Placeholder,
        }
    }
}

impl Args {
    fn apply_to(&self, cfg: &mut Config) {
        if let Some(output) = &self.output {
            cfg.output.file = output.clone();
        }
        if let Some(file) = &self.normalized_file {
            cfg.input.normalized_file = file.clone();
        }
        if let Some(name) = &self.layer_name {
            cfg.output.layer_name = name.clone();
        }
        if let Some(unmatched) = self.unmatched {
            cfg.output.unmatched = unmatched.into();
        }
    }
}

pub fn run() -> Result<ExitCode> {
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    args.apply_to(&mut cfg);

    let gw = match &cfg.geocoding.gateway {
        config::GeocodingGateway::Ban { api_url } => {
            log::info!("Use BAN geocoding gateway ({api_url})");
            Ban::new(api_url.clone())
        }
    };
    let mut host = TerminalHost::new(args.input, GeoJsonFile::new(&cfg.output.file));
    let settings = Settings {
        normalized_file: cfg.input.normalized_file,
        layer_name: cfg.output.layer_name,
        unmatched: cfg.output.unmatched,
    };
    let mut pipeline = Pipeline::new(&gw, settings);

    // Failures are already reported by the pipeline
    match pipeline.run(&mut host) {
        Ok(report) => {
            let stats = report.stats;
            println!(
                "{}: {} addresses, {} points, {} failed, {} without result, {} dropped",
                report.input_file.display(),
                stats.records,
                stats.points,
                stats.failed,
                stats.empty,
                stats.dropped()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_missing_file() => Ok(ExitCode::SUCCESS),
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
