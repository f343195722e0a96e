//! Catalog CLI
//!
//! Terminal front end for the product catalog: an interactive browse loop,
//! one-shot listings in text/HTML/JSON, and static HTML export.

mod browse;

use anyhow::{Context, Result};
use catalog_core::config::{CatalogConfig, OutputFormat};
use catalog_core::fixtures::FixtureStore;
use catalog_core::state::{CatalogSession, ViewState};
use catalog_core::view::{render_html, render_text, CatalogView, TextOptions};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Clone)]
#[command(author, version, about = "Catalog - Product categories browser")]
struct Args {
    /// Directory with users.json, categories.json and products.json
    #[arg(long, global = true)]
    fixtures_dir: Option<PathBuf>,
    /// Output format: text, html or json
    #[arg(long, global = true)]
    format: Option<OutputFormat>,
    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(ClapArgs, Clone, Debug, Default)]
struct FilterArgs {
    /// Show only products owned by this user (exact name)
    #[arg(short, long)]
    user: Option<String>,
    /// Case-insensitive product name search
    #[arg(short, long)]
    query: Option<String>,
}

impl FilterArgs {
    fn into_state(self) -> ViewState {
        ViewState {
            query: self.query.unwrap_or_default(),
            selected_user_name: self.user.unwrap_or_default(),
        }
    }
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Browse the catalog interactively (default)
    Browse,
    /// Render the filtered catalog once
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Write the catalog page as static HTML
    Export {
        /// Output file
        #[arg(short, long)]
        out: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show the loaded fixtures and any dangling references
    Fixtures,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Config file + environment, then command-line flags on top
fn resolve_config(args: &Args) -> Result<CatalogConfig> {
    let mut config = CatalogConfig::load().context("Failed to load catalog config")?;
    if let Some(dir) = &args.fixtures_dir {
        config.fixtures_dir = Some(dir.clone());
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    if args.no_color {
        config.color = false;
    }
    Ok(config)
}

fn load_store(config: &CatalogConfig) -> Result<&'static FixtureStore> {
    match &config.fixtures_dir {
        Some(dir) => {
            let store = FixtureStore::load_dir(dir)
                .with_context(|| format!("Failed to load fixtures from {:?}", dir))?;
            // Fixtures live for the whole process
            Ok(Box::leak(Box::new(store)))
        }
        None => FixtureStore::bundled().context("Failed to load bundled fixtures"),
    }
}

fn render(view: &CatalogView, config: &CatalogConfig) -> Result<String> {
    Ok(match config.format {
        OutputFormat::Text => render_text(view, &TextOptions { color: config.color }),
        OutputFormat::Html => render_html(view),
        OutputFormat::Json => serde_json::to_string_pretty(view)? + "\n",
    })
}

fn print_fixtures(store: &FixtureStore) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Users ({}):", store.users.len())?;
    for user in &store.users {
        writeln!(out, "  {:>3}  {} ({})", user.id, user.name, user.sex.as_str())?;
    }

    writeln!(out, "Categories ({}):", store.categories.len())?;
    for category in &store.categories {
        let owner = store
            .user_by_id(category.owner_id)
            .map(|u| u.name.as_str())
            .unwrap_or("-");
        writeln!(
            out,
            "  {:>3}  {} {} (owner: {})",
            category.id, category.icon, category.title, owner
        )?;
    }

    writeln!(out, "Products: {}", store.products.len())?;

    let dangling = store.dangling_references();
    if dangling.is_empty() {
        writeln!(out, "No dangling references.")?;
    } else {
        writeln!(out, "Dangling references ({}):", dangling.len())?;
        for reference in dangling {
            writeln!(out, "  {}", reference)?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    let store = load_store(&config)?;

    match args.command.unwrap_or(CliCommand::Browse) {
        CliCommand::Browse => {
            let mut session = CatalogSession::new(store);
            let options = TextOptions {
                color: config.color,
            };
            let stdin = io::stdin();
            browse::run(&mut session, &options, stdin.lock(), io::stdout())?;
        }
        CliCommand::List { filter } => {
            let session = CatalogSession::with_state(store, filter.into_state());
            print!("{}", render(&session.view(), &config)?);
        }
        CliCommand::Export { out, filter } => {
            let session = CatalogSession::with_state(store, filter.into_state());
            let view = session.view();
            std::fs::write(&out, render_html(&view))
                .with_context(|| format!("Failed to write {:?}", out))?;
            tracing::info!(path = ?out, rows = view.rows().len(), "Exported catalog page");
            println!("Wrote {} ({} products)", out.display(), view.rows().len());
        }
        CliCommand::Fixtures => print_fixtures(store)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_args() {
        let args = Args::parse_from([
            "catalog", "--format", "json", "list", "--user", "Max", "-q", "jack",
        ]);
        assert_eq!(args.format, Some(OutputFormat::Json));
        match args.command {
            Some(CliCommand::List { filter }) => {
                let state = filter.into_state();
                assert_eq!(state.selected_user_name, "Max");
                assert_eq!(state.query, "jack");
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_default_command_is_browse() {
        let args = Args::parse_from(["catalog"]);
        assert!(args.command.is_none());
        assert!(!args.no_color);
    }

    #[test]
    fn test_render_json() {
        let store = FixtureStore::bundled().unwrap();
        let session = CatalogSession::with_state(
            store,
            ViewState {
                query: "jacket".to_string(),
                selected_user_name: String::new(),
            },
        );
        let config = CatalogConfig {
            format: OutputFormat::Json,
            ..CatalogConfig::default()
        };

        let json: serde_json::Value =
            serde_json::from_str(&render(&session.view(), &config).unwrap()).unwrap();
        assert_eq!(json["body"]["rows"][0]["name"], "Jacket");
        assert_eq!(json["body"]["rows"][0]["user_tone"], "male");
    }
}
