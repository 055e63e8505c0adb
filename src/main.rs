//! locker - Entry Point
//!
//! Interactive manager for the files of a single directory.

use log::{error, info, warn};
use std::io;
use std::process::ExitCode;

use locker::config::AppConfig;
use locker::error::AppError;
use locker::storage::filesystem;
use locker::{DirectoryIndex, Shell};

fn main() -> ExitCode {
    // RUST_LOG overrides the default level; keep the shell quiet otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("locker: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let root = config.root_path();

    if config.create_root && !filesystem::directory_exists(&root) {
        match filesystem::create_directory(&root) {
            Ok(()) => info!("Created root directory {}", root.display()),
            Err(e) => warn!("Failed to create root directory {}: {}", root.display(), e),
        }
    }

    let index = DirectoryIndex::open(&root, config.name_lookup);
    info!("Launching shell on {}", index.root().display());

    let mut shell = Shell::new(index, &config);
    shell.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
