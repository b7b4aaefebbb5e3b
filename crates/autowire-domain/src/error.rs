//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for dependency resolution and instantiation
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Target or member cannot be introspected, or a parameter type is not
    /// a single named type
    #[error("Reflection error: {message}")]
    Reflection {
        /// Description of the reflection failure
        message: String,
    },

    /// A required parameter had no match in any registry
    #[error("Could not meet required dependency \"{type_name}\"")]
    UnmetDependency {
        /// Type name of the unmet parameter
        type_name: String,
    },

    /// A registry holds an entry for the type that cannot be injected
    #[error("Unusable value in registry for type \"{type_name}\"")]
    InvalidRegistryValue {
        /// Type name the registry entry is keyed by
        type_name: String,
    },

    /// The requested type is not known to the catalog
    #[error("Type does not exist: \"{type_name}\"")]
    TargetNotFound {
        /// The requested type name
        type_name: String,
    },

    /// Registry lookup for a key that is not present
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Resolution error creation methods
impl Error {
    /// Create a reflection error
    pub fn reflection<S: Into<String>>(message: S) -> Self {
        Self::Reflection {
            message: message.into(),
        }
    }

    /// Create an unmet dependency error
    pub fn unmet_dependency<S: Into<String>>(type_name: S) -> Self {
        Self::UnmetDependency {
            type_name: type_name.into(),
        }
    }

    /// Create an invalid registry value error
    pub fn invalid_registry_value<S: Into<String>>(type_name: S) -> Self {
        Self::InvalidRegistryValue {
            type_name: type_name.into(),
        }
    }

    /// Create a target not found error
    pub fn target_not_found<S: Into<String>>(type_name: S) -> Self {
        Self::TargetNotFound {
            type_name: type_name.into(),
        }
    }
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}

impl Error {
    /// Type name carried by resolution errors, if any
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::UnmetDependency { type_name }
            | Self::InvalidRegistryValue { type_name }
            | Self::TargetNotFound { type_name } => Some(type_name),
            _ => None,
        }
    }
}
