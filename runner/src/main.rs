use std::path::{Path, PathBuf};
use std::{env, fs, io};

use growbox::api::{Action, ActionError, Event};
use growbox::journal::{MessageSink, Severity};
use growbox::model::Knowledge;
use growbox::persistence::PersistenceError;
use growbox::{DataError, Game};
use log::{error, info, warn};
use prometheus::{Encoder, TextEncoder};

use crate::metrics::{RunnerMetrics, REGISTRY};

mod metrics;

const DEFAULT_SECONDS: f64 = 60.0;
const DEFAULT_TICK: f64 = 1.0;
const DEFAULT_SPEED: f64 = 1.0;

#[derive(Debug)]
enum RunnerError {
    Usage,
    Io(io::Error),
    Data(DataError),
    Persistence(PersistenceError),
    Action(ActionError),
    Metrics(prometheus::Error),
}

impl From<io::Error> for RunnerError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<DataError> for RunnerError {
    fn from(error: DataError) -> Self {
        Self::Data(error)
    }
}

impl From<PersistenceError> for RunnerError {
    fn from(error: PersistenceError) -> Self {
        Self::Persistence(error)
    }
}

impl From<ActionError> for RunnerError {
    fn from(error: ActionError) -> Self {
        Self::Action(error)
    }
}

impl From<prometheus::Error> for RunnerError {
    fn from(error: prometheus::Error) -> Self {
        Self::Metrics(error)
    }
}

struct Settings {
    save: PathBuf,
    seconds: f64,
    tick: f64,
    speed: f64,
}

impl Settings {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, RunnerError> {
        let save = args.next().map(PathBuf::from).ok_or(RunnerError::Usage)?;
        let mut number = |default: f64| -> Result<f64, RunnerError> {
            match args.next() {
                Some(value) => value.parse().map_err(|_| RunnerError::Usage),
                None => Ok(default),
            }
        };
        let seconds = number(DEFAULT_SECONDS)?;
        let tick = number(DEFAULT_TICK)?;
        let speed = number(DEFAULT_SPEED)?;
        if !(tick > 0.0) || !(seconds >= 0.0) {
            return Err(RunnerError::Usage);
        }
        Ok(Self {
            save,
            seconds,
            tick,
            speed,
        })
    }
}

struct LogSink;

impl MessageSink for LogSink {
    fn receive(&mut self, text: &str, severity: Severity) {
        match severity {
            Severity::Info | Severity::Success => info!("[journal] {}", text),
            Severity::Warning | Severity::Error => warn!("[journal] {}", text),
        }
    }
}

fn main() {
    env_logger::init();
    let settings = match Settings::from_args(env::args().skip(1)) {
        Ok(settings) => settings,
        Err(_) => {
            eprintln!("usage: growbox-runner <save.json> [seconds] [tick] [speed]");
            std::process::exit(2);
        }
    };
    if let Err(error) = run(settings) {
        error!("Runner failed: {:?}", error);
        std::process::exit(1);
    }
}

fn load_knowledge() -> Result<Knowledge, RunnerError> {
    match env::var("GROWBOX_KNOWLEDGE") {
        Ok(path) => {
            info!("Loading knowledge from {}", path);
            let data = fs::read_to_string(path)?;
            Ok(Knowledge::from_json(&data)?)
        }
        Err(_) => Ok(Knowledge::standard()),
    }
}

fn load_game(known: Knowledge, path: &Path) -> Result<Game, RunnerError> {
    let mut game = Game::new(known);
    if path.exists() {
        let json = fs::read_to_string(path)?;
        game.load_json(&json)?;
    } else {
        info!("No save at {}, starting a new game", path.display());
    }
    Ok(game)
}

fn domain(event: &Event) -> &'static str {
    match event {
        Event::Timing(_) => "timing",
        Event::Planting(_) => "planting",
        Event::Processing(_) => "processing",
        Event::Market(_) => "market",
        Event::Economy(_) => "economy",
        Event::Inventory(_) => "inventory",
        Event::Progress(_) => "progress",
        Event::Staffing(_) => "staffing",
        Event::Breeding(_) => "breeding",
        Event::Fortune(_) => "fortune",
        Event::Journal(_) => "journal",
    }
}

fn observe(metrics: &RunnerMetrics, events: &[Event]) {
    for event in events {
        metrics.events.with_label_values(&[domain(event)]).inc();
        match event.as_bytes() {
            Ok(bytes) => metrics.event_bytes.inc_by(bytes.len() as u64),
            Err(error) => warn!("Unable to encode event {:?}: {:?}", event, error),
        }
    }
}

fn run(settings: Settings) -> Result<(), RunnerError> {
    let metrics = RunnerMetrics::new(&REGISTRY)?;
    let known = load_knowledge()?;
    let mut game = load_game(known, &settings.save)?;
    game.set_sink(Box::new(LogSink));

    let events = game.perform_action(Action::ChangeSpeed {
        speed: settings.speed,
    })?;
    observe(&metrics, &events);

    info!(
        "Running {}s in ticks of {}s at speed {}",
        settings.seconds, settings.tick, settings.speed
    );
    let mut remaining = settings.seconds;
    while remaining > 0.0 {
        let delta = settings.tick.min(remaining);
        let before = game.timing.world_seconds;
        let events = game.update(delta);
        metrics.ticks.inc();
        metrics
            .simulated_seconds
            .inc_by((game.timing.world_seconds - before).max(0.0));
        observe(&metrics, &events);
        remaining -= delta;
    }

    let json = game.save_json()?;
    fs::write(&settings.save, json)?;
    info!(
        "Saved to {}: {:.2} cash, {:.1} g stock, {} plants, level {}",
        settings.save.display(),
        game.economy.cash,
        game.economy.grams,
        game.planting.plants.len(),
        game.progress.level
    );

    let summary = serde_json::json!({
        "world_seconds": game.timing.world_seconds,
        "cash": game.economy.cash,
        "grams": game.economy.grams,
        "level": game.progress.level,
        "haze": game.progress.haze,
        "best_per_sec": game.economy.best_per_sec,
    });
    println!("{}", summary);

    let mut buffer = vec![];
    let encoder = TextEncoder::new();
    encoder.encode(&REGISTRY.gather(), &mut buffer)?;
    info!("Metrics:\n{}", String::from_utf8_lossy(&buffer));
    Ok(())
}
