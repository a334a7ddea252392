use std::borrow::Cow;

#[derive(thiserror::Error, Debug)]
pub enum PagyError {
    /// A pagination variable is outside its accepted range
    #[error("expected :{name} {expected}; got {value}")]
    Variable {
        name: &'static str,
        expected: Cow<'static, str>,
        value: String,
    },

    /// The requested page is past the last page
    #[error("expected :page in 1..{last}; got {page}")]
    Overflow { page: u64, last: u64 },

    #[error("{0}")]
    Internal(Cow<'static, str>),

    #[error("could not encode data-pagy payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl PagyError {
    pub(crate) fn variable(
        name: &'static str,
        expected: impl Into<Cow<'static, str>>,
        value: impl ToString,
    ) -> Self {
        Self::Variable {
            name,
            expected: expected.into(),
            value: value.to_string(),
        }
    }

    /// HTTP status a request-driven failure maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Overflow { .. } => 404,
            Self::Variable { .. } => 400,
            Self::Internal(_) | Self::Json(_) => 500,
        }
    }
}
