//! CLI command definitions and dispatch for the `murmur` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod conversation;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// A small conversational-chat backend.
#[derive(Parser)]
#[command(name = "murmur", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Seed sample conversations when the database is empty.
        #[arg(long)]
        seed: bool,
    },

    /// List conversations.
    #[command(alias = "ls")]
    List {
        /// Number of conversations to skip.
        #[arg(long, default_value = "0")]
        offset: i64,

        /// Maximum number of conversations to show.
        #[arg(long, default_value = "100")]
        limit: i64,
    },

    /// Show a conversation and its messages.
    Show {
        /// Conversation id to display.
        id: String,
    },

    /// Delete a conversation and all its messages.
    #[command(alias = "rm")]
    Delete {
        /// Conversation id to delete.
        id: String,
    },

    /// Seed sample conversations when the database is empty.
    Seed,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
