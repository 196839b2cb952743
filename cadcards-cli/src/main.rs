//! Cadcards - CAD standards library in the terminal
//!
//! Browse the catalog, star favorites, look up projects and staff, and
//! build layer names. Generative commands degrade to an offline message
//! when no API key is configured.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cadcards_core::catalog::{Category, SidebarMode, SortField, SortMode};
use cadcards_core::config::LibraryConfig;
use cadcards_core::directory::{Department, ProjectStatus};
use cadcards_core::favorites::FileFavoritesStore;
use cadcards_core::session::LibrarySession;
use cadcards_core::tools::{LayerName, LayerPart};

mod catalog_cli;
mod directory_cli;
mod oracle_cli;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Log output format
#[derive(Debug, Clone, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[clap(
    name = "cadcards",
    about = "CAD standards library: layers, blocks, details and specifications",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Log output format
    #[clap(long, default_value = "text", global = true)]
    log_format: LogFormat,

    /// Override the library configuration file path
    #[clap(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Command {
    /// List the entries of a category
    Browse {
        /// LAYERS, MACROS, SYMBOLS, BLOCKS, DETAILS or SPECIFICATIONS
        category: Category,

        /// Case-insensitive search over title and description
        #[clap(long)]
        search: Option<String>,

        /// Toolbar pill: a sub-category, ALL or FAVORITES
        #[clap(long, conflicts_with = "mode")]
        sub: Option<String>,

        /// Sidebar mode: ALL, NEW, FAVORITES or FREQUENT
        #[clap(long)]
        mode: Option<SidebarMode>,

        /// Sort order (e.g. NAME_ASC, USAGE_DESC, ID_ASC)
        #[clap(long)]
        sort: Option<SortMode>,

        /// Click a column header (id, name or usage); repeat to flip direction
        #[clap(long = "column")]
        columns: Vec<SortField>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Star or unstar an entry
    Favorite {
        category: Category,
        id: String,
    },

    /// List starred entry ids
    Favorites {
        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Search the projects directory
    Projects {
        #[clap(long)]
        search: Option<String>,

        /// ACTIVE, HOLD, COMPLETED, ARCHIVED or BIDDING
        #[clap(long)]
        status: Option<ProjectStatus>,

        #[clap(long)]
        json: bool,
    },

    /// Search the personnel directory
    Personnel {
        #[clap(long)]
        search: Option<String>,

        /// Engineering, Surveying, Admin, GIS or Management
        #[clap(long)]
        department: Option<Department>,

        #[clap(long)]
        json: bool,
    },

    /// Compose a DISCIPLINE-CATEGORY-ELEMENT-MODIFIER-STATUS-TYPE layer name
    LayerName {
        /// Start from an existing layer name instead of the default
        #[clap(long)]
        from: Option<LayerName>,

        #[clap(long)]
        discipline: Option<String>,

        #[clap(long = "layer-category")]
        layer_category: Option<String>,

        #[clap(long)]
        element: Option<String>,

        #[clap(long)]
        modifier: Option<String>,

        #[clap(long)]
        status: Option<String>,

        #[clap(long = "type")]
        kind: Option<String>,

        /// Show the options for every tier
        #[clap(long)]
        list: bool,
    },

    /// Two-line boot log for a category
    Lore {
        category: Category,

        #[clap(flatten)]
        oracle: oracle_cli::OracleArgs,
    },

    /// Translate a surveying field code into plain language
    Decode {
        code: String,

        #[clap(flatten)]
        oracle: oracle_cli::OracleArgs,
    },

    /// Draft a scope-of-work narrative for a project
    Scope {
        /// Job number, e.g. 23-101
        project_id: String,

        #[clap(flatten)]
        oracle: oracle_cli::OracleArgs,
    },

    /// Generate a staff avatar image
    Avatar {
        /// Short description of the person
        description: String,

        #[clap(long)]
        department: Option<Department>,

        /// Where to write the image
        #[clap(long)]
        out: PathBuf,

        #[clap(flatten)]
        oracle: oracle_cli::OracleArgs,
    },
}

/// Initialize tracing with CLI flags
fn initialize_tracing(log_level: &LogLevel, log_format: &LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    match log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr) // stdout carries command output
            .init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, &cli.log_format);

    let config = LibraryConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    debug!("Resolved library config: {:?}", config);

    match cli.command {
        Command::Browse {
            category,
            search,
            sub,
            mode,
            sort,
            columns,
            json,
        } => {
            let query = catalog_cli::BrowseQuery {
                search,
                sub,
                mode,
                sort,
                columns,
            };
            catalog_cli::browse(&config, category, query, json).await
        }
        Command::Favorite { category, id } => catalog_cli::favorite(&config, category, &id).await,
        Command::Favorites { json } => catalog_cli::favorites(&config, json),
        Command::Projects {
            search,
            status,
            json,
        } => directory_cli::projects(&config, search, status, json).await,
        Command::Personnel {
            search,
            department,
            json,
        } => directory_cli::personnel(&config, search, department, json).await,
        Command::LayerName {
            from,
            discipline,
            layer_category,
            element,
            modifier,
            status,
            kind,
            list,
        } => {
            if list {
                print_layer_options();
                return Ok(());
            }
            let parts = [
                (LayerPart::Discipline, discipline),
                (LayerPart::Category, layer_category),
                (LayerPart::Element, element),
                (LayerPart::Modifier, modifier),
                (LayerPart::Status, status),
                (LayerPart::Type, kind),
            ];
            let name = build_layer_name(from.unwrap_or_default(), parts)?;
            println!("{name}");
            Ok(())
        }
        Command::Lore { category, oracle } => oracle_cli::lore(category, oracle).await,
        Command::Decode { code, oracle } => oracle_cli::decode(&code, oracle).await,
        Command::Scope { project_id, oracle } => {
            oracle_cli::scope(&config, &project_id, oracle).await
        }
        Command::Avatar {
            description,
            department,
            out,
            oracle,
        } => oracle_cli::avatar(&description, department, &out, oracle).await,
    }
}

/// Open a session backed by the configured favorites file
pub(crate) fn open_session(config: &LibraryConfig) -> Result<LibrarySession> {
    let path = config.resolved_favorites_path()?;
    debug!("Favorites file: {}", path.display());
    Ok(LibrarySession::with_sort(
        Arc::new(FileFavoritesStore::new(path)),
        config.default_sort,
    ))
}

pub(crate) fn print_table<T: Tabled>(rows: &[T]) {
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();
    println!("{table}");
}

/// Trim `text` to `max` characters with an ellipsis
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

fn build_layer_name(
    mut name: LayerName,
    parts: [(LayerPart, Option<String>); 6],
) -> Result<LayerName> {
    for (part, value) in parts {
        if let Some(value) = value {
            name.set(part, &value)
                .with_context(|| format!("Invalid {part}. {}", part.help()))?;
        }
    }
    Ok(name)
}

#[derive(Tabled)]
struct LayerOptionRow {
    #[tabled(rename = "Tier")]
    tier: String,
    #[tabled(rename = "Options")]
    options: String,
    #[tabled(rename = "Question")]
    question: String,
}

fn print_layer_options() {
    let rows: Vec<LayerOptionRow> = LayerPart::ALL
        .iter()
        .map(|part| LayerOptionRow {
            tier: part.as_str().to_uppercase(),
            options: part.options().join(", "),
            question: part.help().to_string(),
        })
        .collect();
    print_table(&rows);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Tree - Save - Existing Vegetation", 12), "Tree - Sa...");
    }

    #[test]
    fn test_build_layer_name_applies_overrides() {
        let name = build_layer_name(
            LayerName::default(),
            [
                (LayerPart::Discipline, Some("sur".to_string())),
                (LayerPart::Category, None),
                (LayerPart::Element, None),
                (LayerPart::Modifier, Some("P-LINE".to_string())),
                (LayerPart::Status, Some("EXST".to_string())),
                (LayerPart::Type, None),
            ],
        )
        .unwrap();
        assert_eq!(name.to_string(), "SUR-UTIL-STRM-P-LINE-EXST-LIN");
    }

    #[test]
    fn test_build_layer_name_rejects_unknown_value() {
        let err = build_layer_name(
            LayerName::default(),
            [
                (LayerPart::Discipline, None),
                (LayerPart::Category, None),
                (LayerPart::Element, Some("BRIDGE".to_string())),
                (LayerPart::Modifier, None),
                (LayerPart::Status, None),
                (LayerPart::Type, None),
            ],
        )
        .unwrap_err();
        assert!(err.to_string().contains("element"));
    }

    #[test]
    fn test_cli_parses_browse() {
        let cli = Cli::try_parse_from([
            "cadcards", "browse", "blocks", "--search", "tree", "--sort", "usage_desc",
        ])
        .unwrap();
        match cli.command {
            Command::Browse {
                category, sort, ..
            } => {
                assert_eq!(category, Category::Blocks);
                assert_eq!(sort, Some(SortMode::UsageDesc));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_cli_collects_column_clicks() {
        let cli = Cli::try_parse_from([
            "cadcards", "browse", "layers", "--column", "id", "--column", "ID",
        ])
        .unwrap();
        match cli.command {
            Command::Browse { columns, .. } => {
                assert_eq!(columns, vec![SortField::Id, SortField::Id]);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(Cli::try_parse_from(["cadcards", "browse", "layers", "--column", "date"]).is_err());
    }

    #[test]
    fn test_cli_rejects_sub_with_mode() {
        let parsed = Cli::try_parse_from([
            "cadcards", "browse", "layers", "--sub", "PROPOSED", "--mode", "NEW",
        ]);
        assert!(parsed.is_err());
    }
}
