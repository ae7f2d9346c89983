// SPDX-License-Identifier: PMPL-1.0-or-later

//! stderr logging via fern

use anyhow::{Context, Result};
use log::LevelFilter;

/// Level for the given `-v` count; `--quiet` wins over any verbosity.
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

pub fn init(verbosity: u8, quiet: bool) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level_for(verbosity, quiet))
        .chain(std::io::stderr())
        .apply()
        .context("initializing logger")
}
