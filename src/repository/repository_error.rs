use crate::error::*;

#[derive(Debug)]
pub enum RepositoryError {
    RecordNotFound,
    InvalidRecord,
    InvalidSchema,
    DatasetNotFound,
}

impl IServiceError for RepositoryError {
    fn error_type(&self) -> String {
        use RepositoryError::*;

        match self {
            RecordNotFound => "record_not_found",
            InvalidRecord => "invalid_record",
            InvalidSchema => "invalid_schema",
            DatasetNotFound => "dataset_not_found",
        }
        .to_string()
    }

    fn exit_code(&self) -> u8 {
        use RepositoryError::*;

        match self {
            RecordNotFound => exit_code::NO_INPUT,
            InvalidRecord => exit_code::DATA_ERR,
            InvalidSchema => exit_code::DATA_ERR,
            DatasetNotFound => exit_code::NO_INPUT,
        }
    }
}
