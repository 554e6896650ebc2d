// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the polyseq command-line interface.
//!
//! Three subcommands: `demo` runs the substitutability demonstration,
//! `append` drives a single variant, and `growth` prints the capacity
//! trajectory of the contiguous variant.

pub mod display;

use clap::{Parser, Subcommand};
use polyseq::SequenceKind;

#[derive(Parser)]
#[command(
    name = "polyseq",
    about = "Two interchangeable integer sequences behind one interface",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append one value to a seeded contiguous and a seeded linked sequence
    Demo {
        /// Value appended to both sequences
        #[arg(long, default_value = "25", allow_negative_numbers = true)]
        value: i32,

        /// Emit JSON snapshots instead of renderings
        #[arg(long)]
        json: bool,
    },

    /// Build one sequence and append values to it
    Append {
        /// Which container to use (contiguous or linked)
        #[arg(short, long)]
        kind: SequenceKind,

        /// Initial contents, comma separated
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        seed: Vec<i32>,

        /// Values to append, in order
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,

        /// Emit a JSON snapshot instead of the rendering
        #[arg(long)]
        json: bool,
    },

    /// Show every reallocation of a contiguous sequence
    Growth {
        /// Starting capacity (0 is allowed)
        #[arg(short, long, default_value = "50")]
        initial: usize,

        /// Number of values to append
        #[arg(short, long, default_value = "200")]
        appends: usize,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
