#![warn(clippy::pedantic)]

pub mod graph;
pub mod host;
pub mod preferences;
pub mod requests;
pub mod script;
pub mod tracking;

use anyhow::Result as AnyResult;

fn main() -> AnyResult<()> {
    let has_term = std::io::IsTerminal::is_terminal(&std::io::stdin());
    // Log to a terminal, if available. Else, log to "log.out" in the working directory.
    if has_term {
        env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .parse_default_env()
            .init();
    } else {
        let _ = simple_logging::log_to_file("log.out", log::LevelFilter::Debug);
    }

    let preferences = preferences::Preferences::load_or_default();
    if let Err(e) = preferences.save() {
        log::warn!("Failed to save preferences:\n{e:?}");
    }

    // Args are a list of scripts to play, each on a fresh drawing.
    let paths: Vec<std::path::PathBuf> = std::env::args_os().skip(1).map(Into::into).collect();
    let scripts: Vec<(String, script::Script)> = if paths.is_empty() {
        log::info!("No scripts given, playing the demo.");
        vec![("demo".to_owned(), script::Script::demo())]
    } else {
        paths
            .iter()
            .filter_map(|path| match script::Script::read_path(path) {
                Ok(script) => Some((path.display().to_string(), script)),
                Err(e) => {
                    log::error!("{e:#}");
                    None
                }
            })
            .collect()
    };
    if scripts.is_empty() {
        anyhow::bail!("Failed to load any provided script.");
    }

    for (name, script) in scripts {
        let mut host = host::Host::new(preferences.to_params(), preferences.empty_undo.0);
        let summary = host.run(script)?;
        println!("{name}: {summary}");
    }
    Ok(())
}
