use crate::{
    pipeline::{Pipeline, Settings, State},
    prelude::*,
};
use geocsv_core::{
    gateways::{geocode::GeoCodingGateway, host::HostApplication},
    usecases::UnmatchedPolicy,
};
use geocsv_entities::builders::Builder;
use std::{
    cell::RefCell,
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

#[derive(Default)]
struct FakeGeoCoder {
    results: HashMap<String, GeocodeResult>,
    requested: RefCell<Vec<String>>,
}

impl FakeGeoCoder {
    fn with(mut self, address: &str, result: GeocodeResult) -> Self {
        self.results.insert(address.into(), result);
        self
    }
}

impl GeoCodingGateway for FakeGeoCoder {
    fn lookup(&self, address: &str) -> GeocodeResult {
        self.requested.borrow_mut().push(address.into());
        self.results
            .get(address)
            .cloned()
            .unwrap_or_else(GeocodeResult::empty)
    }
}

#[derive(Default)]
struct RecordingHost {
    input: Option<PathBuf>,
    reject: bool,
    registered: Vec<OutputLayer>,
    inits: usize,
    exits: usize,
}

impl HostApplication for RecordingHost {
    fn init(&mut self) {
        self.inits += 1;
    }
    fn select_input_file(&mut self) -> Option<PathBuf> {
        self.input.clone()
    }
    fn register_layer(&mut self, layer: OutputLayer) -> anyhow::Result<()> {
        if self.reject {
            anyhow::bail!("read-only project");
        }
        self.registered.push(layer);
        Ok(())
    }
    fn exit(&mut self) {
        self.exits += 1;
    }
}

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn input(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("adresses.csv");
        fs::write(&path, content).unwrap();
        path
    }

    fn settings(&self, unmatched: UnmatchedPolicy) -> Settings {
        Settings {
            normalized_file: self.normalized_file(),
            layer_name: "Pointlayer".into(),
            unmatched,
        }
    }

    fn normalized_file(&self) -> PathBuf {
        self.dir.path().join("normalized.csv")
    }

    fn host(&self, input: &Path) -> RecordingHost {
        RecordingHost {
            input: Some(input.to_owned()),
            ..Default::default()
        }
    }
}

fn paris() -> GeocodeResult {
    GeocodeResult::Features(vec![Candidate::build()
        .coordinates(2.3299, 48.8698)
        .city("Paris")
        .finish()])
}

#[test]
fn geocode_single_address() {
    let fx = Fixture::new();
    let input = fx.input("adresse\n1 Rue de la Paix Paris\n");
    let gw = FakeGeoCoder::default().with("1+Rue+de+la+Paix+Paris", paris());
    let mut host = fx.host(&input);
    let mut pipeline = Pipeline::new(&gw, fx.settings(UnmatchedPolicy::Drop));

    let report = pipeline.run(&mut host).unwrap();

    assert_eq!(*gw.requested.borrow(), vec!["1+Rue+de+la+Paix+Paris"]);
    assert_eq!(report.features, 1);
    assert_eq!(report.input_file, input);
    assert_eq!(host.registered.len(), 1);
    let layer = &host.registered[0];
    assert_eq!(layer.name(), "Pointlayer");
    assert_eq!(layer.len(), 1);
    let point = &layer.features()[0];
    assert_eq!(point.pos, Some(MapPoint::from_lng_lat_deg(2.3299, 48.8698)));
    assert_eq!(point.attributes.city, "Paris");
    assert_eq!(
        fs::read_to_string(fx.normalized_file()).unwrap(),
        "adresse\n1+Rue+de+la+Paix+Paris\n"
    );
    assert_eq!(
        pipeline.visited(),
        &[
            State::Idle,
            State::FileSelected,
            State::Loaded,
            State::Normalized,
            State::Geocoding,
            State::Built,
            State::Registered,
            State::Terminated,
        ]
    );
    assert_eq!((host.inits, host.exits), (1, 1));
}

#[test]
fn network_failure_does_not_abort_the_run() {
    let fx = Fixture::new();
    let input = fx.input("adresse\n1 Rue de la Paix Paris\n2 Rue Inconnue\n");
    let gw = FakeGeoCoder::default()
        .with("1+Rue+de+la+Paix+Paris", paris())
        .with("2+Rue+Inconnue", GeocodeResult::Failed);
    let mut host = fx.host(&input);

    let report = Pipeline::new(&gw, fx.settings(UnmatchedPolicy::Drop))
        .run(&mut host)
        .unwrap();

    assert_eq!(gw.requested.borrow().len(), 2);
    assert_eq!(report.stats.failed, 1);
    assert_eq!(host.registered[0].len(), 1);
    assert_eq!(host.exits, 1);
}

#[test]
fn empty_result_yields_empty_layer() {
    let fx = Fixture::new();
    let input = fx.input("adresse\nNulle Part\n");
    let gw = FakeGeoCoder::default().with("Nulle+Part", GeocodeResult::empty());
    let mut host = fx.host(&input);

    let report = Pipeline::new(&gw, fx.settings(UnmatchedPolicy::Drop))
        .run(&mut host)
        .unwrap();

    assert_eq!(report.stats.empty, 1);
    assert_eq!(report.features, 0);
    assert_eq!(host.registered.len(), 1);
    assert!(host.registered[0].is_empty());
}

#[test]
fn placeholders_for_unmatched_addresses() {
    let fx = Fixture::new();
    let input = fx.input("adresse\nNulle Part\n1 Rue de la Paix Paris\n");
    let gw = FakeGeoCoder::default().with("1+Rue+de+la+Paix+Paris", paris());
    let mut host = fx.host(&input);

    Pipeline::new(&gw, fx.settings(UnmatchedPolicy::Placeholder))
        .run(&mut host)
        .unwrap();

    let layer = &host.registered[0];
    assert_eq!(layer.len(), 2);
    assert!(!layer.features()[0].has_geometry());
    assert_eq!(layer.features()[0].attributes.label, "Nulle+Part");
    assert!(layer.features()[1].has_geometry());
}

#[test]
fn missing_address_column_terminates_without_layer() {
    let fx = Fixture::new();
    let input = fx.input("address\n1 Rue de la Paix Paris\n");
    let gw = FakeGeoCoder::default();
    let mut host = fx.host(&input);
    let mut pipeline = Pipeline::new(&gw, fx.settings(UnmatchedPolicy::Drop));

    let err = pipeline.run(&mut host).unwrap_err();

    assert!(matches!(
        err,
        Error::Usecase(usecases::Error::MissingColumn("adresse"))
    ));
    assert!(host.registered.is_empty());
    assert!(gw.requested.borrow().is_empty());
    assert!(!fx.normalized_file().exists());
    assert_eq!(
        pipeline.visited(),
        &[State::Idle, State::FileSelected, State::Terminated]
    );
    assert_eq!(host.exits, 1);
}

#[test]
fn nothing_selected() {
    let fx = Fixture::new();
    let gw = FakeGeoCoder::default();
    let mut host = RecordingHost::default();
    let mut pipeline = Pipeline::new(&gw, fx.settings(UnmatchedPolicy::Drop));

    let err = pipeline.run(&mut host).unwrap_err();

    assert!(err.is_missing_file());
    assert_eq!(pipeline.state(), State::Terminated);
    assert_eq!((host.inits, host.exits), (1, 1));
}

#[test]
fn rejected_layer() {
    let fx = Fixture::new();
    let input = fx.input("adresse\n1 Rue de la Paix Paris\n");
    let gw = FakeGeoCoder::default().with("1+Rue+de+la+Paix+Paris", paris());
    let mut host = RecordingHost {
        reject: true,
        ..fx.host(&input)
    };
    let mut pipeline = Pipeline::new(&gw, fx.settings(UnmatchedPolicy::Drop));

    let err = pipeline.run(&mut host).unwrap_err();

    assert!(matches!(err, Error::Register(_)));
    assert!(!pipeline.visited().contains(&State::Registered));
    assert_eq!(host.exits, 1);
}

#[test]
fn unwritable_normalized_file() {
    let fx = Fixture::new();
    let input = fx.input("adresse\n1 Rue de la Paix Paris\n");
    let gw = FakeGeoCoder::default();
    let mut host = fx.host(&input);
    let settings = Settings {
        normalized_file: fx.dir.path().join("no-such-dir").join("normalized.csv"),
        ..fx.settings(UnmatchedPolicy::Drop)
    };
    let mut pipeline = Pipeline::new(&gw, settings);

    let err = pipeline.run(&mut host).unwrap_err();

    assert!(matches!(err, Error::Write { .. }));
    assert_eq!(pipeline.state(), State::Terminated);
    assert!(host.registered.is_empty());
    assert_eq!(host.exits, 1);
}
