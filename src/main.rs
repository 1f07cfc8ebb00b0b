// Chunk: docs/chunks/demo_driver - Sample typing session over the editing core
//!
//! gapedit: types a sample text into the editor and prints line 1 and the
//! whole buffer.
//!
//! Usage: `gapedit [CONFIG.toml]`. The log level comes from `GAPEDIT_LOG`
//! (`error`, `warn`, `info`, `debug`, `trace`; default `warn`).

use std::path::PathBuf;

use anyhow::Context;
use gapedit_buffer::EditorConfig;
use log::LevelFilter;
use simple_logger::SimpleLogger;

const LOG_ENV: &str = "GAPEDIT_LOG";

fn main() -> anyhow::Result<()> {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    SimpleLogger::new().with_level(level).init()?;

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => EditorConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EditorConfig::default(),
    };

    let report = gapedit::run_demo(&config, gapedit::SAMPLE_TEXT, 1)?;
    println!("{}", report.line);
    println!("{}", report.rendered);
    Ok(())
}
