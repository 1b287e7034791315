//! Main application entry point.

use gridsketch_app::{AppError, Script, replay};
use std::path::PathBuf;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let path = std::env::args().nth(1).map(PathBuf::from).ok_or(AppError::Usage)?;
    log::info!("Replaying {}", path.display());

    let script = Script::load(&path)?;
    print!("{}", replay(&script)?);
    Ok(())
}
