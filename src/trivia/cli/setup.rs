use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trivia", version)]
#[command(about = "Trivia question bank: browse, search and quiz", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $TRIVIA_HOME, then the platform data dir)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data directory, default config and seed categories
    Init,

    /// Run the HTTP API server
    Serve {
        /// Listen address (overrides config)
        #[arg(short, long)]
        listen: Option<String>,
    },

    /// List categories
    #[command(alias = "cats")]
    Categories,

    /// List questions, ten per page
    #[command(alias = "ls")]
    List {
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Search question text (case-insensitive)
    Search {
        term: String,

        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// List the questions of one category
    Category {
        id: u32,

        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Add a question
    #[command(alias = "n")]
    Add {
        #[arg(short, long)]
        question: Option<String>,

        #[arg(short, long)]
        answer: Option<String>,

        /// Difficulty, 1 or higher
        #[arg(short = 'D', long)]
        difficulty: Option<i64>,

        /// Category id
        #[arg(short, long)]
        category: Option<i64>,
    },

    /// Delete a question by id
    #[command(alias = "rm")]
    Delete { id: u32 },

    /// Draw the next quiz question
    Quiz {
        /// Category id, 0 for any
        #[arg(short, long, default_value_t = 0)]
        category: u32,

        /// Ids of questions already asked
        #[arg(short, long, num_args = 1.., value_delimiter = ',')]
        exclude: Vec<u32>,

        /// Seed for a reproducible pick (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },
}
