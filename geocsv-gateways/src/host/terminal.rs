use super::geojson::GeoJsonFile;
use anyhow::Result;
use geocsv_core::{entities::OutputLayer, gateways::host::HostApplication};
use std::{
    io::{self, BufRead, IsTerminal, Write},
    path::PathBuf,
};

/// A command line host that stores the resulting layer as GeoJSON.
#[derive(Debug)]
pub struct TerminalHost {
    input: Option<PathBuf>,
    interactive: bool,
    registry: GeoJsonFile,
}

impl TerminalHost {
    pub fn new(input: Option<PathBuf>, registry: GeoJsonFile) -> Self {
        Self {
            input,
            interactive: io::stdin().is_terminal(),
            registry,
        }
    }
}

impl HostApplication for TerminalHost {
    fn init(&mut self) {
        log::debug!("Layers will be stored in {}", self.registry.path().display());
    }

    fn select_input_file(&mut self) -> Option<PathBuf> {
        if let Some(path) = self.input.take() {
            return Some(path);
        }
        if !self.interactive {
            return None;
        }
        prompt_for_file(io::stdin().lock(), io::stdout().lock())
    }

    fn register_layer(&mut self, layer: OutputLayer) -> Result<()> {
        self.registry.store(&layer)
    }

    fn exit(&mut self) {
        log::debug!("Closing terminal session");
    }
}

/// Asks for a CSV file; an empty answer selects nothing.
fn prompt_for_file<R: BufRead, W: Write>(mut input: R, mut output: W) -> Option<PathBuf> {
    if let Err(err) = write!(output, "Select the CSV file: ").and_then(|_| output.flush()) {
        log::warn!("Unable to prompt for the input file: {err}");
    }
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => {
            let path = line.trim();
            if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            }
        }
        Err(err) => {
            log::warn!("Unable to read the input file: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_answer() {
        let mut out = Vec::new();
        let path = prompt_for_file(&b"  data/adresses.csv \n"[..], &mut out);
        assert_eq!(path, Some(PathBuf::from("data/adresses.csv")));
        assert_eq!(out, b"Select the CSV file: ");
    }

    #[test]
    fn empty_answer_selects_nothing() {
        assert_eq!(prompt_for_file(&b"\n"[..], io::sink()), None);
        assert_eq!(prompt_for_file(&b""[..], io::sink()), None);
    }

    #[test]
    fn prefer_path_from_command_line() {
        let mut host = TerminalHost::new(
            Some("adresses.csv".into()),
            GeoJsonFile::new("points.geojson"),
        );
        assert_eq!(host.select_input_file(), Some(PathBuf::from("adresses.csv")));
    }
}
