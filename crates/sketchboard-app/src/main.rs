//! Main application entry point.

use sketchboard_app::{App, ScriptError, SessionScript, ShortcutRegistry};
use std::path::PathBuf;
use std::process::ExitCode;

fn usage() {
    println!("Usage: sketchboard <session.json>");
    ShortcutRegistry::print_all();
}

fn run(path: PathBuf) -> Result<(), ScriptError> {
    let script = SessionScript::load(&path)?;
    let (_app, summary) = App::run_script(&script)?;
    log::info!(
        "Replayed {} events: {} shapes, {} frames",
        summary.events,
        summary.shapes,
        summary.frames
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting Sketchboard");

    let Some(arg) = std::env::args_os().nth(1) else {
        usage();
        return ExitCode::FAILURE;
    };
    if arg == "--help" || arg == "-h" {
        usage();
        return ExitCode::SUCCESS;
    }

    match run(PathBuf::from(arg)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
