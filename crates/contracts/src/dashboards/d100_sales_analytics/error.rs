use serde::{Deserialize, Serialize};

/// Результат операции аналитического движка
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Ошибка аналитического движка
///
/// Ошибки разбора сырых записей сюда не попадают — они гасятся
/// нормализатором. Наружу выходят только транспортные сбои и
/// отказы внешнего источника данных.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl AnalyticsError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new("TRANSPORT_ERROR", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn external(message: impl Into<String>) -> Self {
        Self::new("EXTERNAL_ERROR", message)
    }
}

impl std::fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for AnalyticsError {}
