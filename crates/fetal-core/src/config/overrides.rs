use super::FetalConfig;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub scaler_path: Option<String>,
    pub classifier_path: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

impl ConfigOverrides {
    /// Log level for a repeated `-v` flag. Zero leaves the configured level
    /// alone; each step goes one level below the default `info`.
    pub fn log_level_for_verbosity(verbosity: u8) -> Option<String> {
        match verbosity {
            0 => None,
            1 => Some("debug".to_string()),
            _ => Some("trace".to_string()),
        }
    }

    pub fn apply(self, config: &mut FetalConfig) {
        if let Some(v) = self.scaler_path {
            config.artifacts.scaler_path = v;
        }
        if let Some(v) = self.classifier_path {
            config.artifacts.classifier_path = v;
        }
        if let Some(v) = self.host {
            config.server.host = v;
        }
        if let Some(v) = self.port {
            config.server.port = v;
        }
        if let Some(v) = self.log_level {
            config.observability.log_level = v;
        }
    }
}
