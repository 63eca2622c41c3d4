use std::{error::Error, fmt::Display};

pub type SimulationResult<T = ()> = Result<T, SimulationError>;

#[derive(Debug)]
pub struct SimulationError {
    msg: String,
    src: Option<Box<dyn Error>>,
}

impl SimulationError {
    pub fn new<S: Into<String>>(msg: S) -> Self {
        Self {
            msg: msg.into(),
            src: None,
        }
    }

    pub fn with_source<E: Error + 'static>(self, err: E) -> Self {
        Self {
            src: Some(Box::new(err)),
            ..self
        }
    }
}

impl Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.msg)
    }
}

impl Error for SimulationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.src.as_deref()
    }
}

impl From<&str> for SimulationError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<std::io::Error> for SimulationError {
    fn from(value: std::io::Error) -> Self {
        SimulationError::new("failed to write the report").with_source(value)
    }
}
