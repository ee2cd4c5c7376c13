use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Azure CLI (`az`) not found on PATH. Install it from https://aka.ms/azure-cli")]
    BrokerNotFound,

    #[error("Invalid tenant ID '{0}': only alphanumeric characters, '.' and '-' are allowed")]
    InvalidTenant(String),

    #[error("Token acquisition failed: {0}")]
    Acquisition(String),

    #[error("Git config error: {0}")]
    GitConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl CredentialError {
    /// Return a typed exit code for this error category.
    pub fn exit_code(&self) -> i32 {
        match self {
            CredentialError::BrokerNotFound => 3,
            CredentialError::InvalidTenant(_) => 3,
            CredentialError::Acquisition(_) => 1,
            CredentialError::GitConfig(_) => 4,
            CredentialError::Serialization(_) => 1,
            CredentialError::Io(_) => 1,
            CredentialError::Other(_) => 1,
        }
    }

    /// Whether this error means the broker could not be constructed at all.
    pub fn is_broker_construction(&self) -> bool {
        matches!(
            self,
            CredentialError::BrokerNotFound | CredentialError::InvalidTenant(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CredentialError>;
