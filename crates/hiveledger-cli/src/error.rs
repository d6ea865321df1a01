use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Configuration(#[from] hiveledger_core::ConfigurationError),

    #[error(transparent)]
    History(#[from] hiveledger_core::HistoryError),

    #[error(transparent)]
    Source(#[from] hiveledger_core::SourceError),

    #[error(transparent)]
    Export(#[from] hiveledger_core::ExportError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Configuration(_) | Self::Command(_) => 2,
            Self::History(_) | Self::Source(_) => 3,
            Self::Export(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
