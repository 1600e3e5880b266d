// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod util;
util::mod_days![01, 02];

fn main() -> anyhow::Result<()> {
	util::init_logging()?;
	run_days()
}
