// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{env, ffi::OsString, fs, io, path::PathBuf};


/// Declares `dayNN` modules and a `run_days` function printing both parts of each.
macro_rules! mod_days { ( $( $day:literal ),* $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )*

	fn run_days() -> anyhow::Result<()> {
		$(
			println!(concat!("Day ", stringify!($day), "; part 1: {}, part 2: {}"),
				[<day $day>]::part1()?, [<day $day>]::part2()?);
		)*
		Ok(())
	}
} } }

pub(crate) use mod_days;


const INPUT_DIR_VAR: &str = "ADVENT23_INPUT_DIR";
const DEFAULT_INPUT_DIR: &str = "input";

#[derive(Debug, thiserror::Error)]
#[error("failed to read input {path:?}")]
pub(crate) struct InputError {
	path: PathBuf,
	#[source]
	source: io::Error,
}

fn input_dir(var: Option<OsString>) -> PathBuf {
	var.map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR))
}

/// Reads the named file from the input directory (`ADVENT23_INPUT_DIR`, or `input`).
pub(crate) fn input(name: &str) -> Result<String, InputError> {
	let path = input_dir(env::var_os(INPUT_DIR_VAR)).join(name);
	log::debug!("reading {}", path.display());
	fs::read_to_string(&path).map_err(|source| InputError { path, source })
}


const LOG_VAR: &str = "ADVENT23_LOG";

#[derive(Debug, thiserror::Error)]
pub(crate) enum LoggingError {
	#[error("invalid ADVENT23_LOG level {0:?}")]
	Level(String, #[source] log::ParseLevelError),
	#[error("failed to install logger")]
	Install(#[from] log::SetLoggerError),
}

struct Logger;

impl log::Log for Logger {
	fn enabled(&self, _: &log::Metadata) -> bool {
		true
	}

	fn log(&self, record: &log::Record) {
		eprintln!(
			"{file}:{line}: {}: {}",
			record.level(),
			record.args(),
			file = record.file().unwrap_or_default(),
			line = record.line().unwrap_or_default(),
		);
	}

	fn flush(&self) {}
}

static LOGGER: Logger = Logger;

fn log_level(var: Option<String>) -> Result<log::LevelFilter, LoggingError> {
	match var {
		None => Ok(log::LevelFilter::Warn),
		Some(level) => match level.parse() {
			Ok(filter) => Ok(filter),
			Err(e) => Err(LoggingError::Level(level, e)),
		},
	}
}

/// Installs the stderr logger at the level named by `ADVENT23_LOG` (default `warn`).
pub(crate) fn init_logging() -> Result<(), LoggingError> {
	let level = log_level(env::var(LOG_VAR).ok())?;
	log::set_logger(&LOGGER)?;
	log::set_max_level(level);
	Ok(())
}
