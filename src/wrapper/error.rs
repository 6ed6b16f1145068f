pub use crate::repository::RepositoryError;
use anyhow::Error;
use serde::*;
use std::any::Any;

/// sysexits(3)-style process exit codes. The dashboard has no HTTP surface;
/// the only thing the outside world sees of a failure is the exit status.
pub mod exit_code {
    pub const SOFTWARE: u8 = 70;
    pub const DATA_ERR: u8 = 65;
    pub const NO_INPUT: u8 = 66;
    pub const IO_ERR: u8 = 74;
    pub const CONFIG: u8 = 78;
}

pub trait IServiceError: Any {
    fn error_type(&self) -> String {
        "internal_error".to_string()
    }

    fn exit_code(&self) -> u8 {
        exit_code::SOFTWARE
    }
}

#[derive(Debug)]
pub struct ServiceError {
    type_id: std::any::TypeId,
    error_type: String,
    exit_code: u8,
    inner: Error,
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    error_type: String,
    error: String,
}

impl ServiceError {
    pub fn new<E>(err: impl IServiceError, detail: E) -> ServiceError
    where
        Error: From<E>,
    {
        ServiceError {
            type_id: err.type_id(),
            error_type: err.error_type(),
            exit_code: err.exit_code(),
            inner: From::from(detail),
        }
    }

    pub fn only(err: impl IServiceError) -> ServiceError {
        ServiceError {
            type_id: err.type_id(),
            error_type: err.error_type(),
            exit_code: err.exit_code(),
            inner: Error::msg("error"),
        }
    }

    pub fn into_inner(self) -> Error {
        self.inner
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn error_type(&self) -> String {
        self.error_type.clone()
    }

    pub fn is_error_of(&self, err: impl IServiceError) -> bool {
        self.type_id == err.type_id() && self.error_type() == err.error_type()
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error_type: self.error_type.clone(),
            error: format!("{:#}", self.inner),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.to_error_response())
            .unwrap_or_else(|_| format!("{{\"errorType\":\"{}\"}}", self.error_type))
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:#}", self.error_type, self.inner)
    }
}

// anyhow::Error can be treated as ServiceError
impl IServiceError for Error {}

pub enum FutureError {
    JoinError,
}

// for tokio::task::spawn_blocking
impl IServiceError for FutureError {
    fn error_type(&self) -> String {
        match self {
            FutureError::JoinError => "internal_error".to_string(),
        }
    }

    fn exit_code(&self) -> u8 {
        match self {
            FutureError::JoinError => exit_code::SOFTWARE,
        }
    }
}

impl From<tokio::task::JoinError> for ServiceError {
    fn from(err: tokio::task::JoinError) -> ServiceError {
        ServiceError::new(FutureError::JoinError, err)
    }
}

// Errors common to the whole app live here. No business logic; anything a
// caller wants to branch on gets its own custom error.
pub enum GeneralError {
    SerializationError,
    IoError,
    InvalidConfig,
}

impl GeneralError {
    pub fn serialization_error<E>(detail: E) -> ServiceError
    where
        Error: From<E>,
    {
        ServiceError::new(GeneralError::SerializationError, detail)
    }

    pub fn io_error<E>(detail: E) -> ServiceError
    where
        Error: From<E>,
    {
        ServiceError::new(GeneralError::IoError, detail)
    }

    pub fn invalid_config<E>(detail: E) -> ServiceError
    where
        Error: From<E>,
    {
        ServiceError::new(GeneralError::InvalidConfig, detail)
    }
}

impl IServiceError for GeneralError {
    fn error_type(&self) -> String {
        use GeneralError::*;

        match self {
            SerializationError => "serialization_error".to_string(),
            IoError => "io_error".to_string(),
            InvalidConfig => "invalid_config".to_string(),
        }
    }

    fn exit_code(&self) -> u8 {
        use GeneralError::*;

        match self {
            SerializationError => exit_code::DATA_ERR,
            IoError => exit_code::IO_ERR,
            InvalidConfig => exit_code::CONFIG,
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> ServiceError {
        ServiceError::new(GeneralError::IoError, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum E {
        E1,
        E2,
    }

    impl IServiceError for E {
        fn error_type(&self) -> String {
            use E::*;

            match self {
                E1 => "e1",
                E2 => "e2",
            }
            .to_string()
        }

        fn exit_code(&self) -> u8 {
            use E::*;

            match self {
                E1 => exit_code::SOFTWARE,
                E2 => exit_code::DATA_ERR,
            }
        }
    }

    #[test]
    fn it_should_handle_errors() {
        let err = ServiceError::only(E::E1);
        assert_eq!(err.error_type(), "e1".to_string());
        assert_eq!(err.exit_code(), exit_code::SOFTWARE);
        assert!(err.is_error_of(E::E1));
        assert!(!err.is_error_of(E::E2));
    }

    #[derive(PartialEq, Debug)]
    enum F {
        E1,
    }

    impl IServiceError for F {
        fn error_type(&self) -> String {
            use F::*;

            match self {
                E1 => "e1",
            }
            .to_string()
        }

        fn exit_code(&self) -> u8 {
            use F::*;

            match self {
                E1 => exit_code::SOFTWARE,
            }
        }
    }

    #[test]
    fn it_should_distinguish_between_different_types_with_same_name() {
        let e1 = ServiceError::only(E::E1);
        let e2 = ServiceError::only(F::E1);

        assert!(!e1.is_error_of(F::E1));
        assert!(!e2.is_error_of(E::E1));
    }

    #[test]
    fn it_should_serialize_error_responses() {
        let err = ServiceError::new(E::E2, anyhow::anyhow!("bad row"));
        let json = err.to_json();
        assert!(json.contains("\"errorType\":\"e2\""));
        assert!(json.contains("bad row"));
    }
}
