//! Mock Data Generator MCP Server: synthetic records for LLM tool calls.

pub mod config;
pub mod context;
pub mod protocol;
pub mod repl;
pub mod tools;
pub mod transport;
pub mod types;

pub use config::resolve_seed;
pub use context::ServerContext;
pub use protocol::ProtocolHandler;
pub use transport::StdioTransport;
