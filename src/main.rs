// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::config::{self, Config};
use std::path::PathBuf;

fn main() -> iced::Result {
    if let Err(err) = iced_toast::logging::init() {
        eprintln!("{err}");
    }

    let mut args = pico_args::Arguments::from_env();
    let duration_ms: Option<u64> = args.opt_value_from_str("--duration").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --duration");
        None
    });
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --config");
        None
    });

    let loaded = match &config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    let mut config = loaded.unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to load toast config, using defaults");
        Config::default()
    });
    if duration_ms.is_some() {
        config.duration_ms = duration_ms;
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(%err, "failed to start the timer runtime");
            std::process::exit(1);
        }
    };

    app::run(Flags {
        runtime: runtime.handle().clone(),
        config,
    })
}
