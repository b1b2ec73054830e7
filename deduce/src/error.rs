use crate::ast::Span;
use std::fmt;
use std::sync::Arc;

/// Detailed error information with source location
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
    pub span: Span,
    pub source_text: Arc<str>,
    pub suggestion: Option<String>,
}

/// Why an automatic proof search stopped without reaching the conclusion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStop {
    /// A full round over the catalog produced no new step
    Saturated,
    /// The step budget was used up
    BudgetExhausted,
}

/// Error types for the deduce engine
#[derive(Debug, Clone)]
pub enum DeduceError {
    /// Tokenizing or parsing failure with source location
    Syntax(Box<ErrorDetails>),

    /// An assignment is missing a referenced proposition
    Evaluation { proposition: char },

    /// A rule could not be applied; the proof state is unchanged
    RuleApplication(String),

    /// The proof state does not allow the requested operation
    Proof(String),

    /// Automatic search ended without deriving the conclusion
    SearchExhausted {
        reason: SearchStop,
        steps_added: usize,
    },

    /// Resource limit exceeded
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },

    /// Engine error without specific source location
    Engine(String),
}

impl DeduceError {
    /// Create a syntax error pointing at a span of the source
    pub fn syntax(message: impl Into<String>, span: Span, source_text: Arc<str>) -> Self {
        Self::Syntax(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_text,
            suggestion: None,
        }))
    }

    /// Create a syntax error with suggestion
    pub fn syntax_with_suggestion(
        message: impl Into<String>,
        span: Span,
        source_text: Arc<str>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Syntax(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_text,
            suggestion: Some(suggestion.into()),
        }))
    }

    pub fn rule(message: impl Into<String>) -> Self {
        Self::RuleApplication(message.into())
    }

    /// The bare failure message, without the category prefix used by `Display`
    pub fn message(&self) -> String {
        match self {
            DeduceError::Syntax(details) => details.message.clone(),
            DeduceError::Evaluation { proposition } => {
                format!("No truth value provided for proposition {}", proposition)
            }
            DeduceError::RuleApplication(msg)
            | DeduceError::Proof(msg)
            | DeduceError::Engine(msg) => msg.clone(),
            DeduceError::SearchExhausted {
                reason,
                steps_added,
            } => match reason {
                SearchStop::Saturated => format!(
                    "Could not complete proof: no new steps can be derived ({} added)",
                    steps_added
                ),
                SearchStop::BudgetExhausted => format!(
                    "Could not complete proof within the step limit ({} steps added)",
                    steps_added
                ),
            },
            DeduceError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
                ..
            } => format!(
                "Resource limit '{}' exceeded: limit {}, actual {}",
                limit_name, limit_value, actual_value
            ),
        }
    }
}

impl fmt::Display for DeduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeduceError::Syntax(details) => {
                write!(f, "Syntax error: {}", details.message)?;
                if let Some(suggestion) = &details.suggestion {
                    write!(f, " (suggestion: {})", suggestion)?;
                }
                Ok(())
            }
            DeduceError::Evaluation { .. } => write!(f, "Evaluation error: {}", self.message()),
            DeduceError::RuleApplication(msg) => write!(f, "Rule application error: {}", msg),
            DeduceError::Proof(msg) => write!(f, "Proof error: {}", msg),
            DeduceError::SearchExhausted { .. } => write!(f, "{}", self.message()),
            DeduceError::ResourceLimitExceeded { suggestion, .. } => {
                write!(f, "{}. {}", self.message(), suggestion)
            }
            DeduceError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for DeduceError {}

impl From<std::fmt::Error> for DeduceError {
    fn from(err: std::fmt::Error) -> Self {
        DeduceError::Engine(format!("Format error: {}", err))
    }
}
