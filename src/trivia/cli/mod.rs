//! # CLI Layer
//!
//! This module is **one possible client** of the question bank, next to the
//! HTTP server it can also start.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Uses `std::process::exit`
//! - Handles argument parsing
//! - Installs the tracing subscriber
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data dir and config, builds the API
//! - `handle_*()`: Per-command handlers that call the API and print results

mod print;
mod setup;

use clap::Parser;
use directories::ProjectDirs;
use print::{
    print_categories, print_current_category, print_questions, print_quiz_question, print_success,
};
use setup::{Cli, Commands};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trivia::api::TriviaApi;
use trivia::config::{LogLevel, TriviaConfig};
use trivia::error::{ErrorKind, Result, TriviaError};
use trivia::http::{AppState, HttpServer};
use trivia::model::{QuestionDraft, QuizState};
use trivia::store::fs::FileStore;
use trivia::store::{DataStore, DEFAULT_CATEGORIES};

const HOME_ENV: &str = "TRIVIA_HOME";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    let serving = matches!(cli.command, Some(Commands::Serve { .. }));
    init_logging(&ctx.config, cli.verbose, serving);

    match cli.command {
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Serve { listen }) => handle_serve(ctx, listen),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::List { page }) => handle_list(&ctx, page),
        Some(Commands::Search { term, page }) => handle_search(&ctx, term, page),
        Some(Commands::Category { id, page }) => handle_category(&ctx, id, page),
        Some(Commands::Add {
            question,
            answer,
            difficulty,
            category,
        }) => handle_add(
            ctx,
            QuestionDraft {
                text: question,
                answer,
                difficulty,
                category_id: category,
            },
        ),
        Some(Commands::Delete { id }) => handle_delete(ctx, id),
        Some(Commands::Quiz {
            category,
            exclude,
            seed,
        }) => handle_quiz(ctx, QuizState::new(category, exclude), seed),
        None => handle_list(&ctx, 1),
    }
}

struct AppContext {
    data_dir: PathBuf,
    config: TriviaConfig,
}

impl AppContext {
    fn store(&self) -> FileStore {
        FileStore::new(self.config.data_path(&self.data_dir))
    }

    fn api(&self, seed: Option<u64>) -> TriviaApi<FileStore> {
        TriviaApi::with_seed(self.store(), seed.or(self.config.quiz_seed))
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config = TriviaConfig::load(&data_dir)?;
    Ok(AppContext { data_dir, config })
}

fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "trivia", "trivia")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TriviaError::Store("Could not determine a data directory".to_string()))
}

/// `RUST_LOG` wins; otherwise the server logs at the configured level and
/// one-shot commands stay quiet unless `--verbose`.
fn init_logging(config: &TriviaConfig, verbose: bool, serving: bool) {
    let level = if verbose {
        LogLevel::Debug
    } else if serving {
        config.log_level
    } else {
        LogLevel::Warn
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    if !TriviaConfig::exists(&ctx.data_dir) {
        ctx.config.save(&ctx.data_dir)?;
    }

    let store = ctx.store();
    if store.init(DEFAULT_CATEGORIES)? {
        print_success(format!(
            "Initialized {} with {} categories",
            store.path().display(),
            DEFAULT_CATEGORIES.len()
        ));
    } else {
        println!("Data file already exists: {}", store.path().display());
    }
    Ok(())
}

fn handle_serve(ctx: AppContext, listen: Option<String>) -> Result<()> {
    let listen_addr = listen.unwrap_or_else(|| ctx.config.listen_addr.clone());
    let store: Box<dyn DataStore + Send> = Box::new(ctx.store());
    let api = TriviaApi::with_seed(store, ctx.config.quiz_seed);
    let server = HttpServer::new(listen_addr, ctx.config.cors_enabled, AppState::new(api));

    info!(data_dir = %ctx.data_dir.display(), "starting trivia server");
    let runtime = tokio::runtime::Runtime::new().map_err(TriviaError::Io)?;
    runtime.block_on(server.run(async {
        let _ = tokio::signal::ctrl_c().await;
    }))
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api(None).list_categories()?;
    print_categories(&result.categories);
    Ok(())
}

fn handle_list(ctx: &AppContext, page: usize) -> Result<()> {
    let result = ctx.api(None).list_questions(page)?;
    print_questions(
        &result.questions,
        result.categories.as_ref(),
        page,
        result.total_questions,
    );
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String, page: usize) -> Result<()> {
    let api = ctx.api(None);
    let result = api.search_questions(Some(&term), page)?;
    // Labels are optional; only a missing category table is tolerated.
    let categories = match api.list_categories() {
        Ok(payload) => Some(payload.categories),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(e),
    };
    print_questions(
        &result.questions,
        categories.as_ref(),
        page,
        result.total_questions,
    );
    Ok(())
}

fn handle_category(ctx: &AppContext, id: u32, page: usize) -> Result<()> {
    let result = ctx.api(None).category_questions(id, page)?;
    if let Some(category) = &result.current_category {
        print_current_category(category);
    }
    print_questions(&result.questions, None, page, result.total_questions);
    Ok(())
}

fn handle_add(ctx: AppContext, draft: QuestionDraft) -> Result<()> {
    let result = ctx.api(None).create_question(draft, 1)?;
    print_success(format!(
        "Question {} created ({} total)",
        result.created, result.total_questions
    ));
    Ok(())
}

fn handle_delete(ctx: AppContext, id: u32) -> Result<()> {
    let result = ctx.api(None).delete_question(id, 1)?;
    print_success(format!(
        "Question {} deleted ({} left)",
        result.deleted, result.total_questions
    ));
    Ok(())
}

fn handle_quiz(ctx: AppContext, state: QuizState, seed: Option<u64>) -> Result<()> {
    let result = ctx.api(seed).next_quiz_question(&state)?;
    print_quiz_question(&result.question);
    Ok(())
}
