use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub world: WorldSection,
    pub logging: LoggingSection,
    #[serde(default)]
    pub plugins: PluginsSection,
}

#[derive(Debug, Deserialize)]
pub struct ServerSection {
    pub name: String,
    /// Game ticks per second. Default: 20.
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u32,
}

fn default_tick_rate() -> u32 {
    20
}

#[derive(Debug, Deserialize)]
pub struct WorldSection {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct PluginsSection {
    /// Directory holding one `<plugin>/config.json` per plugin.
    #[serde(default = "default_plugins_directory")]
    pub directory: String,
}

fn default_plugins_directory() -> String {
    "plugins".into()
}

impl Default for PluginsSection {
    fn default() -> Self {
        Self {
            directory: default_plugins_directory(),
        }
    }
}

impl ServerSection {
    /// Milliseconds between two game ticks.
    pub fn tick_millis(&self) -> u64 {
        1000 / u64::from(self.tick_rate.max(1))
    }
}

impl ServerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
