use thiserror::Error;
use zbus::fdo;

/// Errors that can occur while talking to MPRIS services
#[derive(Error, Debug)]
pub enum MediaError {
    /// Connection or proxy setup failed
    #[error("D-Bus operation failed: {0}")]
    DbusError(#[from] zbus::Error),

    /// The remote service does not implement the requested method
    #[error("Service {service} doesn't support {method}")]
    UnsupportedMethod {
        /// Bus name of the service that rejected the call
        service: String,
        /// Name of the unsupported D-Bus method
        method: String,
    },

    /// The remote service answered a call with an error
    #[error("{0}")]
    Remote(#[from] fdo::Error),

    /// A property had a type the client can't interpret
    #[error("Invalid value for {property}: {details}")]
    InvalidValue {
        /// Property that failed to convert
        property: String,
        /// Conversion error details
        details: String,
    },
}

impl MediaError {
    /// Whether the error means the interface, property or object doesn't
    /// exist on the remote side.
    ///
    /// Players disagree on which error name they use for a missing
    /// interface, so every "not there" flavour counts.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Remote(
                fdo::Error::UnknownInterface(_)
                    | fdo::Error::UnknownProperty(_)
                    | fdo::Error::UnknownMethod(_)
                    | fdo::Error::UnknownObject(_)
                    | fdo::Error::InvalidArgs(_)
                    | fdo::Error::NotSupported(_)
            )
        )
    }

    /// Classifies a failed method call, separating unimplemented methods
    /// from every other remote fault.
    pub fn from_call(service: &str, method: &str, error: fdo::Error) -> Self {
        match error {
            fdo::Error::UnknownMethod(_) => Self::UnsupportedMethod {
                service: service.to_string(),
                method: method.to_string(),
            },
            other => Self::Remote(other),
        }
    }
}
