//! Configuration management
//!
//! TOML configuration with profile support. Every section is optional; an
//! absent `[[courses]]` list falls back to the built-in catalog.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use signage_catalog::{CatalogError, Course, CourseRegistry, SlideLocator};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "signage.toml";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    /// Course catalog in display order (None = built-in catalog)
    #[serde(default)]
    pub courses: Option<Vec<Course>>,

    /// Named profiles that can override base config
    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (all interfaces by default)
    #[serde(default = "default_host")]
    pub host: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Filesystem locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root holding one directory of `*.html` slides per course
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// Front-end assets served under /static
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

/// Page behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Seconds each slide stays on screen
    #[serde(default = "default_slide_duration")]
    pub slide_duration_secs: u64,
}

/// Profile for overriding settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub server: Option<ServerConfig>,
    pub paths: Option<PathsConfig>,
    pub display: Option<DisplayConfig>,
    pub courses: Option<Vec<Course>>,
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub content_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
}

// Default value functions
fn default_host() -> IpAddr { IpAddr::V4(Ipv4Addr::UNSPECIFIED) }
fn default_port() -> u16 { 8002 }
fn default_content_dir() -> PathBuf { PathBuf::from("content") }
fn default_static_dir() -> PathBuf { PathBuf::from("static") }
fn default_slide_duration() -> u64 { 8 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            slide_duration_secs: default_slide_duration(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config TOML")
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::parse(&content)
    }

    /// Load an explicit file, else `signage.toml` if present, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_or(path, Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load an explicit file, else `fallback` if present, else defaults
    pub fn load_or(path: Option<&Path>, fallback: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                if fallback.is_file() {
                    debug!("using {:?}", fallback);
                    Self::from_file(fallback)
                } else {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply a named profile, merging settings
    ///
    /// Profile settings override base configuration values.
    pub fn apply_profile(mut self, profile_name: &str) -> Result<Self> {
        let profile = self.profiles.get(profile_name)
            .with_context(|| format!("Profile '{}' not found", profile_name))?
            .clone();

        if let Some(server) = profile.server {
            self.server = server;
        }
        if let Some(paths) = profile.paths {
            self.paths = paths;
        }
        if let Some(display) = profile.display {
            self.display = display;
        }
        if let Some(courses) = profile.courses {
            self.courses = Some(courses);
        }

        Ok(self)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(dir) = overrides.content_dir {
            self.paths.content_dir = dir;
        }
        if let Some(dir) = overrides.static_dir {
            self.paths.static_dir = dir;
        }
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }

    /// Build the course registry from the configured catalog
    pub fn registry(&self) -> Result<CourseRegistry, CatalogError> {
        match &self.courses {
            Some(courses) => CourseRegistry::new(courses.clone()),
            None => Ok(CourseRegistry::default()),
        }
    }

    pub fn locator(&self) -> SlideLocator {
        SlideLocator::new(&self.paths.content_dir)
    }
}
