//! Server context, built once at startup and shared read-only with the handler.

use std::time::{Duration, Instant};

use mock_data::{validate_arguments, MockDataGenerator, MockDataResult, ResultSet};
use serde_json::Value;

/// Process-lifetime state for one server instance.
///
/// Holds nothing mutable: every tool call builds its own result set.
#[derive(Debug)]
pub struct ServerContext {
    generator: MockDataGenerator,
    started_at: Instant,
}

impl ServerContext {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => tracing::info!("Deterministic generation enabled (seed {seed})"),
            None => tracing::debug!("Generation seeded from OS entropy"),
        }

        Self {
            generator: MockDataGenerator::from_seed(seed),
            started_at: Instant::now(),
        }
    }

    pub fn generator(&self) -> &MockDataGenerator {
        &self.generator
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Validate raw tool arguments and generate the result set.
    pub fn generate(&self, args: &Value) -> MockDataResult<ResultSet> {
        let request = validate_arguments(args)?;
        tracing::debug!(
            "Generating {} record(s) for fields {:?}",
            request.count,
            request.fields
        );
        Ok(self.generator.generate(&request))
    }
}

impl Default for ServerContext {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Drop for ServerContext {
    fn drop(&mut self) {
        tracing::debug!(
            "Server context released after {:.1}s",
            self.uptime().as_secs_f64()
        );
    }
}
