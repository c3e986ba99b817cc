// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use split_engine::EngineConfig;
use split_engine_domain::DivisionRounding;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Split Engine - edit how a job's quantity is split across its schedule
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the JSON state file
    #[arg(short, long)]
    pub state: PathBuf,

    /// How deltas are divided between weeks
    #[arg(long, value_enum, default_value_t = Rounding::Floor)]
    pub rounding: Rounding,

    /// Print the result without writing the state file
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

impl Args {
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            rounding: self.rounding.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Rounding {
    /// Round toward negative infinity, as older split editors did
    Floor,
    /// Truncate toward zero; every unit of the delta is placed
    TowardZero,
}

impl From<Rounding> for DivisionRounding {
    fn from(value: Rounding) -> Self {
        match value {
            Rounding::TowardZero => Self::TowardZero,
            Rounding::Floor => Self::Floor,
        }
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Print the editor view
    #[command(visible_alias = "s")]
    Show,

    /// Create a state file from a JSON array of split entries
    Init {
        /// The job total the split must add up to
        #[arg(long)]
        total: u64,

        /// JSON file holding the generated split entries
        #[arg(long)]
        entries: PathBuf,

        /// Week to lock from the start (repeatable)
        #[arg(long = "lock", value_name = "WEEK")]
        locked: Vec<u32>,
    },

    /// Set one day's quantity
    #[command(visible_alias = "ed")]
    EditDay {
        /// The day to edit (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// The new quantity as typed
        #[arg(long, allow_hyphen_values = true)]
        quantity: String,
    },

    /// Set a week's total and spread it over the week
    #[command(visible_alias = "ew")]
    EditWeek {
        /// The week to edit
        #[arg(long)]
        week: u32,

        /// The new week total as typed
        #[arg(long, allow_hyphen_values = true)]
        total: String,
    },

    /// Lock or unlock a week
    ToggleLock {
        #[arg(long)]
        week: u32,
    },

    /// Apply the pending backward redistribution
    Confirm,

    /// Discard the pending backward redistribution
    Cancel,
}
