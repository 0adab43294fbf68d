//! Entry point for the **tilerc** binary.
//!
//! ```text
//! tilerc [dump|check|autostart] [--config <path>]
//! ```
//!
//! * `dump` (default) prints the assembled profile as JSON for the host.
//! * `check` validates the profile and reports what it contains.
//! * `autostart` runs the autostart script once.

use log::{error, info};
use std::path::PathBuf;
use tilerc::config::{config_dir, expand_home, Config};
use tilerc::profile::Profile;
use tilerc::spawn::run_autostart;

enum Mode {
    Dump,
    Check,
    Autostart,
}

struct Args {
    mode: Mode,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut mode = Mode::Dump;
    let mut config = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "dump" => mode = Mode::Dump,
            "check" => mode = Mode::Check,
            "autostart" => mode = Mode::Autostart,
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(Args { mode, config })
}

/// Load the config from `--config`, or from
/// `$XDG_CONFIG_HOME/tilerc/config.json`, falling back to compiled-in
/// defaults when the default file is missing.
fn load_config(explicit: Option<PathBuf>) -> Result<Config, String> {
    if let Some(path) = explicit {
        let cfg = Config::load(&path).map_err(|e| e.to_string())?;
        info!("loaded config from {}", path.display());
        return Ok(cfg);
    }
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            Ok(cfg)
        }
        Err(e) if !path.exists() => {
            info!("no config file ({}), using defaults", e);
            Ok(Config::default())
        }
        Err(e) => Err(e.to_string()),
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = load_config(args.config)?;

    match args.mode {
        Mode::Autostart => {
            run_autostart(&expand_home(&config.autostart)).map_err(|e| e.to_string())?;
        }
        Mode::Dump => {
            let profile = Profile::build(&config).map_err(|e| e.to_string())?;
            let json = profile.to_json().map_err(|e| e.to_string())?;
            println!("{}", json);
        }
        Mode::Check => {
            let profile = Profile::build(&config).map_err(|e| e.to_string())?;
            println!(
                "ok: {} keys, {} mouse bindings, {} groups, {} layouts, {} screens",
                profile.keys.len(),
                profile.mouse.len(),
                profile.groups.len(),
                profile.layouts.len(),
                profile.screens.len()
            );
        }
    }
    Ok(())
}
