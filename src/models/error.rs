use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// A reference source is missing or malformed. Fatal at startup.
    ReferenceLoadError {
        source_name: String,
        message: String,
    },
    IoError(std::io::Error),
    CsvError(String),
    /// A configuration value could not be interpreted.
    ConfigError(String),
    /// The worker pool could not be started. Fatal for the batch.
    WorkerPoolError(String),
    /// A single name could not be processed. Isolated to that name.
    ExtractionError {
        raw: String,
        message: String,
    },
    UninitializedModel(String),
    InferenceError(String),
}

impl Error {
    pub fn reference_load(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ReferenceLoadError {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ReferenceLoadError {
                source_name,
                message,
            } => write!(f, "Reference Load Error ({}): {}", source_name, message),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::CsvError(msg) => write!(f, "CSV Error: {}", msg),
            Error::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            Error::WorkerPoolError(msg) => write!(f, "Worker Pool Error: {}", msg),
            Error::ExtractionError { raw, message } => {
                write!(f, "Extraction Error on {:?}: {}", raw, message)
            }
            Error::UninitializedModel(model_id) => write!(
                f,
                "Uninitialized Model: {} was not loaded; call load() before predict()",
                model_id
            ),
            Error::InferenceError(msg) => write!(f, "Inference Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::CsvError(err.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Error {
        Error::WorkerPoolError(err.to_string())
    }
}
