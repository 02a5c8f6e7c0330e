//! MCP tool implementations.

pub mod generate_mock_data;
pub mod registry;

pub use registry::ToolRegistry;
