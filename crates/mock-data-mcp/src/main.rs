//! Mock Data Generator MCP Server entry point.

use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use serde_json::{json, Map, Value};

use mock_data_mcp::config::resolve_seed;
use mock_data_mcp::context::ServerContext;
use mock_data_mcp::protocol::ProtocolHandler;
use mock_data_mcp::tools::ToolRegistry;
use mock_data_mcp::transport::StdioTransport;

#[derive(Parser)]
#[command(
    name = "mock-data-mcp",
    about = "MCP server for mock data generation — synthetic records for LLM tool calls",
    version
)]
struct Cli {
    /// Seed for deterministic output. Also reads MOCK_DATA_SEED.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server over stdio (default).
    Serve,

    /// Start MCP server over HTTP.
    #[cfg(feature = "http")]
    ServeHttp {
        /// Listen address (host:port).
        #[arg(long, default_value = mock_data_mcp::config::DEFAULT_HTTP_ADDR)]
        addr: String,

        /// Bearer token for authentication.
        /// Also reads from MOCK_DATA_TOKEN env var.
        #[arg(long)]
        token: Option<String>,
    },

    /// Generate records once and print them as JSON.
    ///
    /// Example:
    ///   mock-data-mcp generate --count 3 name email favoriteColor
    Generate {
        /// Number of records (1-100).
        #[arg(short, long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Field names (name, email, phone, address, company, job, city, country, or any other).
        fields: Vec<String>,
    },

    /// Print server capabilities as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   mock-data-mcp completions bash > ~/.local/share/bash-completion/completions/mock-data-mcp
    ///   mock-data-mcp completions zsh > ~/.zfunc/_mock-data-mcp
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },

    /// Launch interactive REPL mode.
    Repl,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let seed = resolve_seed(cli.seed)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let context = Arc::new(ServerContext::new(seed));
            let handler = ProtocolHandler::new(context);
            let transport = StdioTransport::new(handler);
            transport.run().await?;
            tracing::info!("Transport closed, server stopped");
        }

        #[cfg(feature = "http")]
        Commands::ServeHttp { addr, token } => {
            use mock_data_mcp::config::resolve_token;
            use mock_data_mcp::transport::HttpTransport;

            let token = resolve_token(token);
            if token.is_some() {
                tracing::info!("Auth: bearer token required");
            }

            let context = Arc::new(ServerContext::new(seed));
            let handler = ProtocolHandler::new(context);
            let transport = HttpTransport::new(handler, token);
            transport.run(&addr).await?;
        }

        Commands::Generate { count, fields } => {
            let mut args = Map::new();
            if let Some(count) = count {
                args.insert("count".to_string(), json!(count));
            }
            args.insert("fields".to_string(), json!(fields));

            let context = ServerContext::new(seed);
            let results = context.generate(&Value::Object(args))?;
            println!("{}", results.to_pretty_json()?);
        }

        Commands::Info => {
            let capabilities = mock_data_mcp::types::InitializeResult::default_result();
            let tools = ToolRegistry::list_tools();
            let info = json!({
                "server": capabilities.server_info,
                "protocol_version": capabilities.protocol_version,
                "capabilities": capabilities.capabilities,
                "tools": tools.iter().map(|t| &t.name).collect::<Vec<_>>(),
                "tool_count": tools.len(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "mock-data-mcp", &mut std::io::stdout());
        }

        Commands::Repl => {
            mock_data_mcp::repl::run(seed)?;
        }
    }

    Ok(())
}
