use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::math::integration::concurrenttrapezoid::ConcurrentTrapezoid;
use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::sequentialtrapezoid::SequentialTrapezoid;

const DEFAULT_NODES: usize = 1_000_000;
const DEFAULT_WORKERS: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] IntegrationError),
}

/// 積分設定：節點數與 worker 數。
///
/// worker 數只透過這裡明確傳給 [`ConcurrentTrapezoid`]，不存在 process-wide
/// 的 thread pool 設定。JSON 中缺少的欄位使用預設值：
///
/// ```json
/// { "nodes": 100000, "workers": 8 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default = "default_nodes")]
    nodes: usize,
    #[serde(default = "default_workers")]
    workers: usize,
}

fn default_nodes() -> usize {
    DEFAULT_NODES
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            nodes: DEFAULT_NODES,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl Configuration {
    pub fn new(nodes: usize, workers: usize) -> Result<Configuration, ConfigurationError> {
        let config = Configuration { nodes, workers };
        config.validate()?;
        Ok(config)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration, ConfigurationError> {
        let config: Configuration = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn nodes(&self) -> usize {
        self.nodes
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.nodes == 0 {
            return Err(IntegrationError::ZeroNodes.into());
        }
        if self.workers == 0 {
            return Err(IntegrationError::ZeroWorkers.into());
        }
        Ok(())
    }

    pub fn sequential(&self) -> Result<SequentialTrapezoid, IntegrationError> {
        SequentialTrapezoid::new(self.nodes)
    }

    pub fn concurrent(&self) -> Result<ConcurrentTrapezoid, IntegrationError> {
        ConcurrentTrapezoid::new(self.nodes, self.workers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::integration::integrator::Integrator;

    #[test]
    fn reads_json() {
        let json = r#"{ "nodes": 1000, "workers": 3 }"#;
        let config = Configuration::from_reader(json.as_bytes()).unwrap();
        assert_eq!(config.nodes(), 1000);
        assert_eq!(config.workers(), 3);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = Configuration::from_reader(r#"{ "workers": 2 }"#.as_bytes()).unwrap();
        assert_eq!(config.nodes(), DEFAULT_NODES);
        assert_eq!(config.workers(), 2);
        assert_eq!(Configuration::from_reader("{}".as_bytes()).unwrap(), Configuration::default());
    }

    #[test]
    fn zero_workers_is_invalid() {
        let result = Configuration::from_reader(r#"{ "workers": 0 }"#.as_bytes());
        assert!(matches!(
            result,
            Err(ConfigurationError::Invalid(IntegrationError::ZeroWorkers))
        ));
        assert!(Configuration::new(0, 1).is_err());
    }

    #[test]
    fn malformed_json_is_reported() {
        let result = Configuration::from_reader(r#"{ "nodes": "many" }"#.as_bytes());
        assert!(matches!(result, Err(ConfigurationError::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Configuration::from_file("/nonexistent/trapezoid.json");
        assert!(matches!(result, Err(ConfigurationError::Io(_))));
    }

    #[test]
    fn builds_integrators() {
        let config = Configuration::new(200, 4).unwrap();
        let seq = config.sequential().unwrap().integrate(|x: f64| x, 0.0, 2.0).unwrap();
        let con = config.concurrent().unwrap().integrate(|x: f64| x, 0.0, 2.0).unwrap();
        assert!((seq - 2.0).abs() < 1e-12);
        assert!((con - seq).abs() < 1e-12);
    }
}
