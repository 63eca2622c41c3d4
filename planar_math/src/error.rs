use std::{error::Error, fmt::Display};

pub type VectorResult<T = ()> = Result<T, VectorError>;

#[derive(Debug)]
pub struct VectorError {
    message: String,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl VectorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(self, err: impl Error + Send + Sync + 'static) -> Self {
        Self {
            source: Some(Box::new(err)),
            ..self
        }
    }
}

impl Display for VectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl Error for VectorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn Error + 'static))
    }
}

impl From<&str> for VectorError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
