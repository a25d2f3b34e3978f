//! CLI administration tool for user-service.
//!
//! Provides commands for inspecting the user directory and performing
//! database maintenance without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # List stored users
//! cargo run --bin admin -- users list
//!
//! # Count stored users
//! cargo run --bin admin -- users count
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Run a raw maintenance statement
//! cargo run --bin admin -- db exec "DELETE FROM users WHERE name = ''"
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//!
//! # Features
//!
//! - **Directory Inspection**: List and count stored users
//! - **Database Tools**: Connection checks, info queries, raw statements
//! - **Interactive Prompts**: Confirmation dialog before raw SQL runs
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use user_service::domain::repositories::UserRepository;
use user_service::infrastructure::persistence::{PgGateway, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing user-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect the user directory
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Directory inspection subcommands.
#[derive(Subcommand)]
enum UsersAction {
    /// List all users
    List,

    /// Count stored users
    Count,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Execute a raw SQL statement
    Exec {
        /// Statement to run verbatim (no parameterization)
        statement: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Users { action } => handle_users_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches directory inspection commands.
async fn handle_users_action(action: UsersAction, pool: &PgPool) -> Result<()> {
    match action {
        UsersAction::List => {
            list_users(pool).await?;
        }
        UsersAction::Count => {
            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?;

            println!(
                "  Users: {}",
                count.to_string().bright_green().bold()
            );
        }
    }

    Ok(())
}

/// Lists all users in a table.
///
/// # Output Format
///
/// ```text
/// Users
///
///   ID  Name
///   ────────────────────────────────────
///   1   Alice
///   2   Bob
/// ```
async fn list_users(pool: &PgPool) -> Result<()> {
    let repo = PgUserRepository::new(PgGateway::new(Arc::new(pool.clone())));

    println!("{}", "Users".bright_blue().bold());
    println!();

    let users = repo.list().await.context("Failed to list users")?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<30}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold()
    );
    println!("  {}", "─".repeat(36).bright_black());

    for user in &users {
        println!(
            "  {:<6} {:<30}",
            user.id.to_string().bright_black(),
            user.name.cyan()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic and maintenance commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Exec { statement, yes } => {
            execute_statement(pool, statement, yes).await?;
        }
    }

    Ok(())
}

/// Runs a raw SQL statement through the persistence gateway.
///
/// # Flow
///
/// 1. Display the statement with a warning
/// 2. Confirm execution (unless `--yes` flag)
/// 3. Open a unit of work, execute, commit
///
/// # Safety
///
/// The statement runs verbatim with no parameterization. The confirmation
/// prompt defaults to No; callers own escaping and must not paste statements
/// built from untrusted input.
async fn execute_statement(pool: &PgPool, statement: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "Execute raw SQL".bright_blue().bold());
    println!();
    println!("  {}", statement.bright_yellow());
    println!();
    println!(
        "{}",
        "WARNING: the statement runs verbatim, with no parameterization."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Run this statement?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let gateway = PgGateway::new(Arc::new(pool.clone()));

    let mut uow = gateway.begin().await?;
    gateway
        .execute_statement(&mut uow, &statement)
        .await
        .context("Failed to execute statement")?;
    uow.commit().await.context("Failed to commit")?;

    println!();
    println!("{}", "Statement executed".green().bold());
    println!();

    Ok(())
}
