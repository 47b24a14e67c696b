/*!
 * Run Configuration
 * JSON run files plus environment overrides
 */

use crate::core::errors::{SimError, SimResult};
use crate::deadlock::DeadlockInput;
use crate::scheduler::SchedulingRequest;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Environment variable overriding the report format
pub const OUTPUT_ENV: &str = "SCHEDSIM_OUTPUT";

/// How reports are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(SimError::Configuration(format!(
                "Invalid output format '{}'. Valid: text, json",
                other
            ))),
        }
    }
}

/// Everything one invocation of the simulator should do
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunConfig {
    #[serde(default)]
    pub scheduling: Vec<SchedulingRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadlock: Option<DeadlockInput>,
    #[serde(default)]
    pub output: OutputFormat,
}

impl RunConfig {
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| SimError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            scheduling_runs = config.scheduling.len(),
            deadlock_check = config.deadlock.is_some(),
            "Run file loaded"
        );
        Ok(config)
    }

    /// Built-in sample: one run per algorithm plus the classic five-process snapshot
    pub fn demo() -> Self {
        let bursts = vec![10.0, 1.0, 2.0, 1.0, 5.0];

        Self {
            scheduling: vec![
                SchedulingRequest::new("fcfs", bursts.clone()),
                SchedulingRequest::new("sjf", bursts.clone()),
                SchedulingRequest::new("priority", bursts.clone())
                    .with_priorities(vec![3, 1, 4, 5, 2]),
                SchedulingRequest::new("roundrobin", bursts).with_time_quantum(1.0),
            ],
            deadlock: Some(DeadlockInput {
                allocation: vec![
                    vec![0, 1, 0],
                    vec![2, 0, 0],
                    vec![3, 0, 2],
                    vec![2, 1, 1],
                    vec![0, 0, 2],
                ],
                request: vec![
                    vec![0, 0, 0],
                    vec![2, 0, 2],
                    vec![0, 0, 0],
                    vec![1, 0, 0],
                    vec![0, 0, 2],
                ],
                available: vec![0, 0, 0],
            }),
            output: OutputFormat::Text,
        }
    }

    /// Apply SCHEDSIM_* environment overrides
    pub fn apply_env_overrides(mut self) -> SimResult<Self> {
        if let Ok(value) = std::env::var(OUTPUT_ENV) {
            self.output = value.parse()?;
            info!(output = ?self.output, "Output format overridden from environment");
        }
        Ok(self)
    }
}
