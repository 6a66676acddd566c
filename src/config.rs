//! Runtime configuration for the simulator binary.
//!
//! The command line carries exactly one argument (the workload file).
//! Everything else comes from environment variables:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `CPUSCHED_OUTPUT` | report file | `cpu-output-data.txt` |
//! | `CPUSCHED_POLICIES` | comma list of `fifo,sjf,priority` | all three |
//! | `CPUSCHED_FORMAT` | `text` or `json` | `text` |
//! | `CPUSCHED_SHOW_PROCESSES` | append per-process tables | `false` |

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scheduler::{ParsePolicyError, Policy};

/// Default report file.
pub const DEFAULT_OUTPUT: &str = "cpu-output-data.txt";

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed two-decimal statistics blocks.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::Format(other.to_string())),
        }
    }
}

/// Invalid configuration value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Unknown policy in `CPUSCHED_POLICIES`.
    #[error(transparent)]
    Policy(#[from] ParsePolicyError),
    /// `CPUSCHED_POLICIES` named no policy.
    #[error("no scheduling policies selected")]
    NoPolicies,
    /// Unknown `CPUSCHED_FORMAT`.
    #[error("unknown output format '{0}' (expected text or json)")]
    Format(String),
}

/// Simulator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Workload file.
    pub input_path: PathBuf,
    /// Report file.
    pub output_path: PathBuf,
    /// Policies to run, in report order.
    pub policies: Vec<Policy>,
    /// Report format.
    pub format: OutputFormat,
    /// Whether to include per-process tables in text reports.
    pub show_processes: bool,
}

impl SimulationConfig {
    /// Creates a configuration with defaults for everything but the input.
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            policies: Policy::ALL.to_vec(),
            format: OutputFormat::Text,
            show_processes: false,
        }
    }

    /// Builds a configuration from the process environment.
    pub fn from_env(input_path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Self::from_lookup(input_path, |key| std::env::var(key).ok())
    }

    /// Builds a configuration reading variables through `lookup`.
    pub fn from_lookup<F>(input_path: impl Into<PathBuf>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(input_path);

        if let Some(output) = lookup("CPUSCHED_OUTPUT").filter(|v| !v.trim().is_empty()) {
            config.output_path = PathBuf::from(output);
        }
        if let Some(list) = lookup("CPUSCHED_POLICIES") {
            config.policies = parse_policy_list(&list)?;
        }
        if let Some(format) = lookup("CPUSCHED_FORMAT") {
            config.format = format.parse()?;
        }
        if let Some(flag) = lookup("CPUSCHED_SHOW_PROCESSES") {
            config.show_processes = is_truthy(&flag);
        }

        Ok(config)
    }

    /// Sets the report file.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Sets the policies to run.
    pub fn with_policies(mut self, policies: Vec<Policy>) -> Self {
        self.policies = policies;
        self
    }

    /// Sets the report format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enables per-process tables.
    pub fn with_show_processes(mut self, show: bool) -> Self {
        self.show_processes = show;
        self
    }
}

fn parse_policy_list(list: &str) -> Result<Vec<Policy>, ConfigError> {
    let policies = list
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(Policy::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    if policies.is_empty() {
        return Err(ConfigError::NoPolicies);
    }
    Ok(policies)
}

pub(crate) fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::from_lookup("in.txt", lookup(&[])).unwrap();
        assert_eq!(config.input_path, PathBuf::from("in.txt"));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.policies, Policy::ALL.to_vec());
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.show_processes);
    }

    #[test]
    fn test_env_overrides() {
        let config = SimulationConfig::from_lookup(
            "in.txt",
            lookup(&[
                ("CPUSCHED_OUTPUT", "out.json"),
                ("CPUSCHED_POLICIES", "priority, fifo"),
                ("CPUSCHED_FORMAT", "JSON"),
                ("CPUSCHED_SHOW_PROCESSES", "yes"),
            ]),
        )
        .unwrap();
        assert_eq!(config.output_path, PathBuf::from("out.json"));
        assert_eq!(config.policies, vec![Policy::Priority, Policy::Fifo]);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.show_processes);
    }

    #[test]
    fn test_bad_policy() {
        let err = SimulationConfig::from_lookup("in", lookup(&[("CPUSCHED_POLICIES", "sjf,rr")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Policy(ParsePolicyError("rr".into())));
    }

    #[test]
    fn test_empty_policy_list() {
        let err = SimulationConfig::from_lookup("in", lookup(&[("CPUSCHED_POLICIES", " , ")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::NoPolicies);
    }

    #[test]
    fn test_bad_format() {
        assert!(matches!(
            SimulationConfig::from_lookup("in", lookup(&[("CPUSCHED_FORMAT", "xml")])),
            Err(ConfigError::Format(_))
        ));
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::new("a")
            .with_output_path("b")
            .with_policies(vec![Policy::Sjf])
            .with_format(OutputFormat::Json)
            .with_show_processes(true);
        assert_eq!(config.output_path, PathBuf::from("b"));
        assert_eq!(config.policies, vec![Policy::Sjf]);
        assert!(config.show_processes);
    }

    #[test]
    fn test_truthy() {
        assert!(is_truthy("1"));
        assert!(is_truthy(" TRUE "));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
    }
}
