use std::path::{Path, PathBuf};

use anyhow::Result;
use shell_window::{TomlSettingsStore, settings_path};

use shell_cli::session::{SessionPlan, reset_settings, run_session_at};

use crate::cli::{SessionArgs, SettingsAction};
use crate::summary::{print_session, print_settings};

/// Settings file from `--config`, or the platform default.
pub fn resolve_settings_path(config: Option<&Path>) -> PathBuf {
    config.map_or_else(settings_path, Path::to_path_buf)
}

pub fn run_settings(action: SettingsAction, path: &Path) -> Result<()> {
    match action {
        SettingsAction::Show => {
            let store = TomlSettingsStore::open(path);
            print_settings(path, &store.settings().window);
        }
        SettingsAction::Path => println!("{}", path.display()),
        SettingsAction::Reset => {
            let settings = reset_settings(path)?;
            print_settings(path, &settings.window);
        }
    }
    Ok(())
}

pub fn run_session_command(args: &SessionArgs, path: &Path) -> Result<()> {
    let plan = SessionPlan {
        destinations: args.destinations.clone(),
        back: args.back,
        forward: args.forward,
        maximize: args.maximize,
    };

    let persist = !args.no_persist;
    let report = run_session_at(&plan, path, persist)?;
    print_session(&report, persist.then_some(path));
    Ok(())
}
