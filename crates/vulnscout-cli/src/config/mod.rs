//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use vulnscout::recon::PortSpec;
use vulnscout::{CveClient, DEFAULT_BASE_URL};

use crate::cli::args::ScanArgs;

/// Ports version-scanned when nothing else is configured
pub const DEFAULT_TOP_PORTS: u16 = 100;

/// Summary width when nothing else is configured
pub const DEFAULT_SUMMARY_WIDTH: usize = 100;

/// Keys accepted by `vulnscout config set`
pub const KEYS: [&str; 6] = [
    "api_url",
    "nmap_path",
    "top_ports",
    "summary_width",
    "jobs",
    "timeout_secs",
];

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the CVE search service.
    pub api_url: Option<String>,

    /// Path to the nmap binary.
    pub nmap_path: Option<String>,

    /// Number of most common ports to version-scan.
    pub top_ports: Option<u16>,

    /// Summary width in the report.
    pub summary_width: Option<usize>,

    /// Hosts analysed at the same time.
    pub jobs: Option<usize>,

    /// HTTP timeout for lookups, in seconds.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the default config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "vulnscout", "vulnscout")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// A missing file, or no home directory to find it in, means defaults.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Set one key from its textual value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_url" => {
                CveClient::builder().base_url(value).build()?;
                self.api_url = Some(value.to_string());
            }
            "nmap_path" | "nmap" => self.nmap_path = Some(value.to_string()),
            "top_ports" => self.top_ports = Some(value.parse()?),
            "summary_width" => self.summary_width = Some(value.parse()?),
            "jobs" => self.jobs = Some(value.parse()?),
            "timeout_secs" | "timeout" => self.timeout_secs = Some(value.parse()?),
            _ => {
                anyhow::bail!(
                    "Unknown config key: {}\n\nAvailable keys: {}",
                    key,
                    KEYS.join(", ")
                );
            }
        }
        Ok(())
    }
}

/// Scan settings after merging flags, environment and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub nmap: String,
    pub ports: PortSpec,
    pub jobs: usize,
    pub summary_width: usize,
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Flags (and their env vars) win over the config file, which wins over defaults.
    pub fn resolve(args: &ScanArgs, config: &Config) -> Self {
        let ports = if args.default_ports {
            PortSpec::ScannerDefault
        } else if !args.ports.is_empty() {
            PortSpec::List(args.ports.clone())
        } else {
            PortSpec::Top(
                args.top_ports
                    .or(config.top_ports)
                    .unwrap_or(DEFAULT_TOP_PORTS),
            )
        };

        Self {
            api_url: args
                .api_url
                .clone()
                .or_else(|| config.api_url.clone())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            nmap: args
                .nmap
                .clone()
                .or_else(|| config.nmap_path.clone())
                .unwrap_or_else(|| "nmap".to_string()),
            ports,
            jobs: args.jobs.or(config.jobs).unwrap_or(1).max(1),
            summary_width: args
                .summary_width
                .or(config.summary_width)
                .unwrap_or(DEFAULT_SUMMARY_WIDTH),
            timeout: args
                .timeout
                .or(config.timeout_secs)
                .map(Duration::from_secs),
        }
    }

    /// Build the lookup client these settings describe.
    pub fn client(&self) -> Result<CveClient> {
        let mut builder = CveClient::builder().base_url(&self.api_url);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::resolve(&ScanArgs::default(), &Config::default());
        assert_eq!(settings.api_url, DEFAULT_BASE_URL);
        assert_eq!(settings.nmap, "nmap");
        assert_eq!(settings.ports, PortSpec::Top(DEFAULT_TOP_PORTS));
        assert_eq!(settings.jobs, 1);
        assert_eq!(settings.summary_width, DEFAULT_SUMMARY_WIDTH);
        assert_eq!(settings.timeout, None);
    }

    #[test]
    fn flags_beat_config() {
        let config = Config {
            api_url: Some("http://cve.internal".into()),
            top_ports: Some(1000),
            jobs: Some(8),
            timeout_secs: Some(10),
            ..Config::default()
        };
        let args = ScanArgs {
            top_ports: Some(20),
            jobs: Some(0),
            ..ScanArgs::default()
        };

        let settings = Settings::resolve(&args, &config);
        assert_eq!(settings.api_url, "http://cve.internal");
        assert_eq!(settings.ports, PortSpec::Top(20));
        assert_eq!(settings.jobs, 1);
        assert_eq!(settings.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn explicit_port_list() {
        let args = ScanArgs {
            ports: vec![22, 443],
            ..ScanArgs::default()
        };
        let settings = Settings::resolve(&args, &Config::default());
        assert_eq!(settings.ports, PortSpec::List(vec![22, 443]));
    }

    #[test]
    fn set_validates_values() {
        let mut config = Config::default();
        config.set("jobs", "4").unwrap();
        config.set("timeout", "30").unwrap();
        assert_eq!(config.jobs, Some(4));
        assert_eq!(config.timeout_secs, Some(30));

        assert!(config.set("jobs", "many").is_err());
        assert!(config.set("api_url", "not a url").is_err());
        assert!(config.set("colour", "blue").is_err());
    }

    #[test]
    fn round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        let mut config = Config::default();
        config.set("api_url", "http://localhost:5000").unwrap();
        config.set("top_ports", "25").unwrap();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }
}
