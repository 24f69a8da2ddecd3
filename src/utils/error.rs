use thiserror::Error;

#[derive(Error, Debug)]
pub enum OfferError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("Dependency '{dependency}' failed: {message}")]
    DependencyFailure { dependency: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl OfferError {
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn dependency(dependency: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DependencyFailure {
            dependency: dependency.into(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Process exit code for a failed run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } => ErrorSeverity::Medium,
            Self::DependencyFailure { .. } => ErrorSeverity::Critical,
            Self::IoError(_) => ErrorSeverity::Critical,
            Self::SerializationError(_) | Self::TomlError(_) => ErrorSeverity::High,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::NotFound { entity, .. } => {
                format!("Check that the {} id exists in the catalog", entity)
            }
            Self::DependencyFailure { dependency, .. } => {
                format!("Check the availability of the {} store and retry", dependency)
            }
            Self::IoError(_) => "Check file paths and permissions".to_string(),
            Self::SerializationError(_) => {
                "Make sure the catalog file is valid JSON in the expected shape".to_string()
            }
            Self::TomlError(_) => "Make sure the config file is valid TOML".to_string(),
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. }
            | Self::MissingConfigError { field } => {
                format!("Fix the '{}' setting in the config file or CLI flags", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotFound { entity, id } => format!("No {} with id '{}'", entity, id),
            Self::DependencyFailure { dependency, .. } => {
                format!("Could not read from {}", dependency)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OfferError>;
