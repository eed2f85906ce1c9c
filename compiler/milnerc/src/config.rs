//! Command-line configuration.

use thiserror::Error;

/// Options for one driver run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DriverConfig {
    /// Only run samples whose name contains this string.
    pub filter: Option<String>,
    /// Print types with their raw variable ids instead of normalizing.
    pub raw: bool,
    /// Install the hierarchical tracing layer.
    pub trace: bool,
    /// Print each sample's expression before its type.
    pub verbose: bool,
    /// Print usage and exit.
    pub help: bool,
}

/// Error from parsing command-line arguments.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("`--filter` needs a value, as in `--filter=<name>`")]
    EmptyFilter,
}

impl DriverConfig {
    /// Parse arguments, not including the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = DriverConfig::default();

        for arg in args {
            let arg = arg.as_ref();
            if let Some(filter) = arg.strip_prefix("--filter=") {
                if filter.is_empty() {
                    return Err(ConfigError::EmptyFilter);
                }
                config.filter = Some(filter.to_string());
            } else if arg == "--raw" {
                config.raw = true;
            } else if arg == "--trace" {
                config.trace = true;
            } else if arg == "--verbose" || arg == "-v" {
                config.verbose = true;
            } else if arg == "--help" || arg == "-h" {
                config.help = true;
            } else if arg.starts_with('-') {
                return Err(ConfigError::UnknownOption(arg.to_string()));
            } else {
                return Err(ConfigError::UnexpectedArgument(arg.to_string()));
            }
        }

        Ok(config)
    }

    /// Check if a sample with this name should run.
    pub fn selects(&self, name: &str) -> bool {
        match &self.filter {
            Some(filter) => name.contains(filter.as_str()),
            None => true,
        }
    }
}
