use anyhow::{anyhow, Result};
use geocsv_core::usecases::UnmatchedPolicy;
use geocsv_gateways::geocoding::ban;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geocsv.toml";

const ENV_NAME_API_URL: &str = "GEOCSV_API_URL";

pub struct Config {
    pub geocoding: Geocoding,
    pub input: Input,
    pub output: Output,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.override_api_url(env::var(ENV_NAME_API_URL).ok());
        Ok(cfg)
    }

    /// Replaces the endpoint of the geocoding gateway.
    /// Blank values are ignored.
    fn override_api_url(&mut self, api_url: Option<String>) {
        let Some(api_url) = api_url.filter(|url| !url.trim().is_empty()) else {
            return;
        };
        log::debug!("Use geocoding endpoint {api_url} from {ENV_NAME_API_URL}");
        match &mut self.geocoding.gateway {
            GeocodingGateway::Ban { api_url: url } => *url = api_url,
        }
    }
}

pub struct Geocoding {
    pub gateway: GeocodingGateway,
}

pub enum GeocodingGateway {
    /// Base Adresse Nationale
    Ban { api_url: String },
}

pub struct Input {
    /// The normalized copy of the input file.
    pub normalized_file: PathBuf,
}

pub struct Output {
    pub layer_name: String,
    /// GeoJSON file the layer is registered to.
    pub file: PathBuf,
    pub unmatched: UnmatchedPolicy,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            gateway,
            input,
            output,
        } = from;

        let gw_name = geocoding
            .unwrap_or_default()
            .gateway
            .ok_or_else(|| anyhow!("No geocoding gateway configured"))?;
        let gateway = match gw_name {
            raw::GeocodingGateway::Ban => {
                let raw::Ban { api_url } = gateway
                    .unwrap_or_default()
                    .ban
                    .ok_or_else(|| anyhow!("Missing 'ban' gateway configuration"))?;
                let api_url = api_url.unwrap_or_else(|| ban::DEFAULT_API_URL.to_string());
                GeocodingGateway::Ban { api_url }
            }
        };
        let geocoding = Geocoding { gateway };

        let raw::Input { normalized_file } = input.unwrap_or_default();
        let normalized_file = normalized_file
            .or_else(|| raw::Input::default().normalized_file)
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| anyhow!("No file for the normalized addresses defined"))?;
        let input = Input { normalized_file };

        let raw::Output {
            layer_name,
            file,
            unmatched,
        } = output.unwrap_or_default();
        let defaults = raw::Output::default();
        let layer_name = layer_name
            .or(defaults.layer_name)
            .ok_or_else(|| anyhow!("No output layer name defined"))?;
        let file = file
            .or(defaults.file)
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| anyhow!("No output file defined"))?;
        let unmatched = match unmatched.or(defaults.unmatched) {
            Some(raw::Unmatched::Placeholder) => UnmatchedPolicy::Placeholder,
            Some(raw::Unmatched::Drop) | None => UnmatchedPolicy::Drop,
        };
        let output = Output {
            layer_name,
            file,
            unmatched,
        };

        Ok(Self {
            geocoding,
            input,
            output,
        })
    }
}
