use anyhow::Result;
use envy::Error;
use serde::Deserialize;
use std::time::Duration;

pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, Error>;
}

pub trait FromEnvLikeKeyValuePairs: Sized {
    fn from_iter(iter: impl Iterator<Item = (String, String)> + Clone) -> Result<Self, Error>;
}

impl<T: FromEnvLikeKeyValuePairs> FromEnv for T {
    fn from_env() -> Result<Self, Error> {
        // std::env::Vars is not Clone
        Self::from_iter(std::env::vars().collect::<Vec<_>>().into_iter())
    }
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    pub stats_server_config: StatsServerConfig,
    pub dashboard_config: DashboardConfig,
    pub environment_config: EnvironmentConfig,
}

impl FromEnvLikeKeyValuePairs for AppConfig {
    fn from_iter(iter: impl Iterator<Item = (String, String)> + Clone) -> Result<Self, Error> {
        Ok(Self {
            stats_server_config: StatsServerConfig::from_iter(iter.clone())?,
            dashboard_config: DashboardConfig::from_iter(iter.clone())?,
            environment_config: EnvironmentConfig::from_iter(iter)?,
        })
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct StatsServerConfig {
    pub base_url: String,
    pub request_timeout_secs: Option<u64>,
}

impl StatsServerConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct DashboardConfig {
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_max_data_points")]
    pub max_data_points: usize,
}

const fn default_refresh_interval_secs() -> u64 {
    5
}

const fn default_max_data_points() -> usize {
    20
}

impl DashboardConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct EnvironmentConfig {
    #[serde(default = "default_environment_name")]
    pub environment_name: String,
    pub sentry_dsn: Option<String>,
}

fn default_environment_name() -> String {
    "local".to_string()
}

impl EnvironmentConfig {
    pub fn is_local(&self) -> bool {
        self.environment_name == "local"
    }
}

impl FromEnvLikeKeyValuePairs for StatsServerConfig {
    fn from_iter(iter: impl Iterator<Item = (String, String)> + Clone) -> Result<Self, Error> {
        envy::prefixed("STATS_SERVER_").from_iter(iter)
    }
}

impl FromEnvLikeKeyValuePairs for DashboardConfig {
    fn from_iter(iter: impl Iterator<Item = (String, String)> + Clone) -> Result<Self, Error> {
        envy::prefixed("DASHBOARD_").from_iter(iter)
    }
}

impl FromEnvLikeKeyValuePairs for EnvironmentConfig {
    fn from_iter(iter: impl Iterator<Item = (String, String)> + Clone) -> Result<Self, Error> {
        envy::prefixed("ENV_").from_iter(iter)
    }
}
