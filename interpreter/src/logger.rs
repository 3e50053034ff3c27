// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use env_logger::Env;

pub struct Logger;

impl Logger {
    pub fn initialize(verbose: bool) {
        let default_filter = if verbose { "debug" } else { "warn" };

        env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
            .format_timestamp(None)
            .init();
    }
}
