use resale_map::api::{MapSession, SessionCommand, SessionConfig, SessionSnapshot, SessionUpdate};
use resale_map::core::load_records_from_path;
use resale_map::render::NullPresenter;
use resale_map::telemetry::init_default_tracing;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    script: PathBuf,
    output: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
struct ScriptFile {
    #[serde(default)]
    config: Option<SessionConfig>,
    commands: Vec<SessionCommand>,
}

#[derive(Debug, Clone, Serialize)]
struct TraceFile {
    dataset: String,
    initial: SessionSnapshot,
    steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, Serialize)]
struct TraceStep {
    command: SessionCommand,
    update: SessionUpdate,
    snapshot: SessionSnapshot,
    fit_bounds_requested: bool,
    scrolled_into_view: Option<String>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let records = load_records_from_path(&args.input).map_err(|err| err.to_string())?;
    let raw = fs::read_to_string(&args.script)
        .map_err(|err| format!("failed to read `{}`: {err}", args.script.display()))?;
    let script: ScriptFile =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let config = script.config.unwrap_or_default();
    let mut session =
        MapSession::new(NullPresenter::default(), records, config).map_err(|err| err.to_string())?;
    let initial = session.snapshot();

    let mut steps = Vec::with_capacity(script.commands.len());
    for command in script.commands {
        let fits_before = session.presenter().fit_bounds_requests;
        let scrolls_before = session.presenter().scrolled_ids.len();
        let update = session
            .dispatch(command.clone())
            .map_err(|err| err.to_string())?;
        let presenter = session.presenter();
        steps.push(TraceStep {
            command,
            update,
            snapshot: session.snapshot(),
            fit_bounds_requested: presenter.fit_bounds_requests > fits_before,
            scrolled_into_view: presenter.scrolled_ids.get(scrolls_before).cloned(),
        });
    }

    let trace = TraceFile {
        dataset: args.input.display().to_string(),
        initial,
        steps,
    };
    write_json(&args.output, &trace)
}

fn write_json<T: Serialize>(path: &PathBuf, value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize json: {err}"))?;
    fs::write(path, payload).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut script = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let slot = match flag.as_str() {
            "--input" => &mut input,
            "--script" => &mut script,
            "--output" => &mut output,
            _ => return Err(format!("unknown argument `{flag}`")),
        };
        let value = args
            .next()
            .ok_or_else(|| format!("missing value for {flag}"))?;
        *slot = Some(PathBuf::from(value));
    }

    let usage =
        "usage: session_trace_tool --input <dataset.csv> --script <commands.json> --output <path>";
    Ok(CliArgs {
        input: input.ok_or_else(|| usage.to_owned())?,
        script: script.ok_or_else(|| usage.to_owned())?,
        output: output.ok_or_else(|| usage.to_owned())?,
    })
}
