use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    Validation(String),
    SectorInUse(String),
    NotFound(String),
}

impl BoardError {
    pub fn validation<M: Into<String>>(message: M) -> Self {
        Self::Validation(message.into())
    }

    pub fn sector_in_use<M: Into<String>>(message: M) -> Self {
        Self::SectorInUse(message.into())
    }

    pub fn not_found<M: Into<String>>(message: M) -> Self {
        Self::NotFound(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::SectorInUse(_) => "sector_in_use",
            Self::NotFound(_) => "not_found",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message) => message,
            Self::SectorInUse(message) => message,
            Self::NotFound(message) => message,
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message())
    }
}

impl std::error::Error for BoardError {}
