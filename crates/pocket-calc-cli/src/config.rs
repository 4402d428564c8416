//! CLI configuration and logging setup

use tracing_subscriber::EnvFilter;

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Informational logging
    Verbose,
    /// Full engine tracing
    Debug,
}

impl Verbosity {
    /// Builds the verbosity from the repeatable `-v` flag and `-q`
    #[must_use]
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else {
            match verbose {
                0 => Self::Normal,
                1 => Self::Verbose,
                _ => Self::Debug,
            }
        }
    }

    /// Returns true for Verbose or Debug
    #[must_use]
    pub fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// The default tracing filter directive for this level
    #[must_use]
    pub fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info,pocket_calc=debug",
            Self::Debug => "trace",
        }
    }
}

/// Runtime configuration assembled from CLI flags
#[derive(Debug, Clone, Copy, Default)]
pub struct CliConfig {
    /// Output verbosity
    pub verbosity: Verbosity,
}

impl CliConfig {
    /// Creates a configuration with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the verbosity
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

/// Initializes tracing to stderr, honoring `RUST_LOG` when set
pub fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
