//! Stdio transport. Reads JSON-RPC from stdin, writes to stdout.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::protocol::ProtocolHandler;
use crate::types::{McpError, McpResult, RequestId};

use super::framing;

/// Stdio transport for desktop MCP clients.
pub struct StdioTransport {
    handler: ProtocolHandler,
}

impl StdioTransport {
    pub fn new(handler: ProtocolHandler) -> Self {
        Self { handler }
    }

    /// Run the transport loop on the process's stdin and stdout.
    pub async fn run(&self) -> McpResult<()> {
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();

        tracing::info!("Mock Data Generator MCP Server running on stdio");
        self.serve(reader, writer).await
    }

    /// Serve newline-delimited messages until `reader` reaches EOF.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> McpResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let bytes_read = reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(McpError::Io)?;

            if bytes_read == 0 {
                tracing::info!("EOF on input, shutting down");
                break;
            }

            // Invalid UTF-8 gets a parse error reply like any other bad line.
            let parsed = std::str::from_utf8(&buf)
                .map_err(|e| McpError::ParseError(e.to_string()))
                .and_then(|line| match line.trim() {
                    "" => Ok(None),
                    trimmed => framing::parse_message(trimmed).map(Some),
                });

            let response = match parsed {
                Ok(None) => continue,
                Ok(Some(msg)) => self.handler.handle_message(msg).await,
                Err(e) => {
                    tracing::warn!("Rejected message: {e}");
                    Some(serde_json::to_value(e.to_json_rpc_error(RequestId::Null))?)
                }
            };

            if let Some(response) = response {
                let framed = framing::frame_message(&response)?;
                writer
                    .write_all(framed.as_bytes())
                    .await
                    .map_err(McpError::Io)?;
                writer.flush().await.map_err(McpError::Io)?;
            }
        }

        Ok(())
    }
}
