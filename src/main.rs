use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mwodeora::config::{self, AppConfig};
use mwodeora::search::{self, SearchResult};
use mwodeora::{catalog, FeatureRequestLog, Tool};

#[derive(Parser, Debug)]
#[command(
    name = "mwodeora",
    about = "그 뭐더라 - find the right tool from a free-text query",
    arg_required_else_help = true
)]
struct Cli {
    /// Config file (default: ./config.json, created on first run).
    #[arg(long, short = 'c', value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Catalog JSON file, overrides the config and the bundled catalog.
    #[arg(long, value_name = "FILE", global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the tool that best matches a query.
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
        /// Also print the full score table.
        #[arg(long)]
        explain: bool,
        /// Do not record unmatched queries as feature requests.
        #[arg(long)]
        no_log: bool,
    },
    /// Inspect the tool catalog.
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Manage recorded feature requests.
    Requests {
        #[command(subcommand)]
        command: RequestsCommand,
    },
    /// Print version and build time.
    Version,
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List tools grouped by category.
    List {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum RequestsCommand {
    /// Show the most recent requests.
    List {
        #[arg(short, long, default_value_t = 20)]
        limit: u32,
        #[arg(long)]
        json: bool,
    },
    /// Count stored requests.
    Count,
    /// Delete all stored requests.
    Clear,
}

fn init_tracing(app_config: &AppConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| app_config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_catalog(cli_path: Option<&Path>, app_config: &AppConfig) -> Result<Vec<Tool>> {
    catalog::resolve(cli_path, app_config).context("Failed to load catalog")
}

async fn open_request_log(app_config: &AppConfig) -> Result<FeatureRequestLog> {
    let path = app_config.request_db_path();
    FeatureRequestLog::open(&path)
        .await
        .with_context(|| format!("Failed to open feature request log {:?}", path))
}

fn print_result(result: &SearchResult<'_, Tool>) {
    match result.top {
        Some(top) => {
            println!("{} {} ({}) {}", top.icon, top.name, top.id, top.route);
            println!("confidence: {:.2}", result.confidence);
            if !result.alternatives.is_empty() {
                println!("alternatives:");
                for tool in &result.alternatives {
                    println!("  - {} {} ({})", tool.icon, tool.name, tool.id);
                }
            }
        }
        None => {
            println!("No matching tool for \"{}\" (confidence {:.2})", result.query, result.confidence);
        }
    }
}

/// Unmatched queries become feature requests unless --no-log / 매칭 실패 시 기능 요청으로 기록
fn should_record(result: &SearchResult<'_, Tool>, no_log: bool) -> bool {
    result.no_match && !no_log
}

async fn run_search(
    query: String,
    tools: &[Tool],
    app_config: &AppConfig,
    json_output: bool,
    explain: bool,
    no_log: bool,
) -> Result<()> {
    let (result, ranked) = search::search_ranked(&query, tools);

    if should_record(&result, no_log) {
        let log = open_request_log(app_config).await?;
        if log.record_unmatched(&result).await?.is_some() && !json_output {
            println!("Recorded as a feature request.");
        }
        log.close().await;
    }

    let ranking = explain.then_some(ranked);

    if json_output {
        let output = match &ranking {
            Some(ranked) => json!({
                "result": &result,
                "ranking": ranked
                    .iter()
                    .map(|s| json!({ "id": s.entry.id, "score": s.score }))
                    .collect::<Vec<_>>(),
            }),
            None => serde_json::to_value(&result)?,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_result(&result);
    if let Some(ranked) = ranking {
        println!();
        println!("{:>9}  {:<24} name", "score", "id");
        for scored in ranked {
            println!("{:>9.3}  {:<24} {}", scored.score, scored.entry.id, scored.entry.name);
        }
    }
    Ok(())
}

fn list_catalog(tools: &[Tool], json_output: bool) -> Result<()> {
    let groups = catalog::by_category(tools);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    for (category, tools) in groups {
        println!("[{}]", if category.is_empty() { "-" } else { category });
        for tool in tools {
            println!("  {} {} ({})", tool.icon, tool.name, tool.id);
        }
    }
    Ok(())
}

async fn run_requests(command: RequestsCommand, app_config: &AppConfig) -> Result<()> {
    let log = open_request_log(app_config).await?;

    match command {
        RequestsCommand::List { limit, json } => {
            let requests = log.recent(limit).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&requests)?);
            } else if requests.is_empty() {
                println!("No feature requests.");
            } else {
                for request in requests {
                    println!("{}  {}", request.created_at, request.query);
                }
            }
        }
        RequestsCommand::Count => println!("{}", log.count().await?),
        RequestsCommand::Clear => {
            let removed = log.clear().await?;
            tracing::info!("Cleared {} feature requests", removed);
            println!("Removed {} feature requests.", removed);
        }
    }

    log.close().await;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration / 설정 로드
    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let existed = config_path.exists();
    config::init_config(Some(&config_path)).context("Failed to load configuration")?;
    let app_config = config::config();

    // Initialize logging / 로그 초기화
    init_tracing(&app_config);
    if existed {
        tracing::info!("Loaded configuration from {:?}", config_path);
    } else {
        tracing::info!("Created default configuration at {:?}", config_path);
    }

    match cli.command {
        Command::Search { query, json, explain, no_log } => {
            let tools = load_catalog(cli.catalog.as_deref(), &app_config)?;
            run_search(query.join(" "), &tools, &app_config, json, explain, no_log).await
        }
        Command::Catalog { command: CatalogCommand::List { json } } => {
            let tools = load_catalog(cli.catalog.as_deref(), &app_config)?;
            list_catalog(&tools, json)
        }
        Command::Requests { command } => run_requests(command, &app_config).await,
        Command::Version => {
            println!(
                "mwodeora {} (built {})",
                env!("CARGO_PKG_VERSION"),
                env!("MWODEORA_BUILD_TIME")
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_flags() {
        let args = ["mwodeora", "search", "사진", "PDF로", "--no-log", "--catalog", "tools.json"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("tools.json")));
        match cli.command {
            Command::Search { query, json, explain, no_log } => {
                assert_eq!(query.join(" "), "사진 PDF로");
                assert!(no_log);
                assert!(!json && !explain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_search_records_by_default() {
        let cli = Cli::try_parse_from(["mwodeora", "search", "환율"]).unwrap();
        assert!(cli.catalog.is_none());
        assert!(matches!(cli.command, Command::Search { no_log: false, .. }));
    }

    #[test]
    fn test_should_record() {
        let tools = vec![Tool::new("qr", "QR 생성기", "", &[])];
        let unmatched = search::search("zzqqxx123", &tools);
        let matched = search::search("QR 생성기", &tools);

        assert!(should_record(&unmatched, false));
        assert!(!should_record(&unmatched, true));
        assert!(!should_record(&matched, false));
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["mwodeora", "search"]).is_err());
    }
}
