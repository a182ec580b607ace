use crate::{load_addresses, prelude::*, reopen_addresses, session::HostSession};
use geocsv_core::{
    gateways::{geocode::GeoCodingGateway, host::HostApplication},
    usecases::{GeocodingStats, UnmatchedPolicy},
};
use std::path::PathBuf;

/// The stages of a run.
///
/// A run only ever moves forward and always ends with
/// [`State::Terminated`], either after registering the
/// layer or directly after a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum State {
    Idle,
    FileSelected,
    Loaded,
    Normalized,
    Geocoding,
    Built,
    Registered,
    Terminated,
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// Where the normalized copy of the input is stored.
    pub normalized_file: PathBuf,
    pub layer_name: String,
    pub unmatched: UnmatchedPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub input_file: PathBuf,
    pub stats: GeocodingStats,
    pub features: usize,
}

pub struct Pipeline<'g, G> {
    gw: &'g G,
    settings: Settings,
    visited: Vec<State>,
}

impl<'g, G> Pipeline<'g, G>
where
    G: GeoCodingGateway,
{
    pub fn new(gw: &'g G, settings: Settings) -> Self {
        Self {
            gw,
            settings,
            visited: vec![State::Idle],
        }
    }

    pub fn state(&self) -> State {
        *self.visited.last().unwrap_or(&State::Idle)
    }

    /// All states this pipeline went through so far.
    pub fn visited(&self) -> &[State] {
        &self.visited
    }

    fn enter(&mut self, next: State) {
        debug_assert!(next > self.state());
        log::debug!("{:?} -> {:?}", self.state(), next);
        self.visited.push(next);
    }

    /// Runs the whole batch within a single host session.
    ///
    /// Every run starts from [`State::Idle`] again.
    pub fn run<H>(&mut self, host: &mut H) -> Result<Report>
    where
        H: HostApplication,
    {
        if self.state() != State::Idle {
            log::debug!("Restarting pipeline");
            self.visited = vec![State::Idle];
        }
        let mut session = HostSession::start(host);
        let res = self.execute(&mut session);
        drop(session);
        match &res {
            Ok(report) => log::info!(
                "Added {} of {} addresses to layer '{}'",
                report.features,
                report.stats.records,
                self.settings.layer_name
            ),
            Err(err) if err.is_missing_file() => log::info!("{err}"),
            Err(err) => log::error!("{}", error_chain(err)),
        }
        self.enter(State::Terminated);
        res
    }

    fn execute<H>(&mut self, session: &mut HostSession<'_, H>) -> Result<Report>
    where
        H: HostApplication,
    {
        let input_file = usecases::require_input_file(session.select_input_file())?;
        self.enter(State::FileSelected);

        let mut table = load_addresses::load(&input_file)?;
        self.enter(State::Loaded);

        table.normalize();
        table.store(&self.settings.normalized_file)?;
        self.enter(State::Normalized);

        let records = reopen_addresses::reopen(&self.settings.normalized_file)?;
        self.enter(State::Geocoding);

        let mut layer = OutputLayer::new(self.settings.layer_name.clone());
        let stats =
            usecases::geocode_addresses(self.gw, records, &mut layer, self.settings.unmatched)?;
        self.enter(State::Built);

        let features = layer.len();
        session.register_layer(layer).map_err(Error::Register)?;
        self.enter(State::Registered);

        Ok(Report {
            input_file,
            stats,
            features,
        })
    }
}

fn error_chain(err: &Error) -> String {
    let mut msg = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
