use thiserror::Error;

/// Errors that can occur while parsing invoice inputs or computing totals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FacturaError {
    /// Caller-supplied text or number failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(InvalidInput),
}

impl FacturaError {
    /// The validation failure, if this is an input error.
    pub fn invalid_input(&self) -> Option<&InvalidInput> {
        match self {
            Self::InvalidInput(e) => Some(e),
        }
    }

    /// Shorthand for the kind of input failure.
    pub fn kind(&self) -> InputErrorKind {
        match self {
            Self::InvalidInput(e) => e.kind,
        }
    }
}

/// Why an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InputErrorKind {
    EmptyDate,
    MalformedDate,
    EmptyAmount,
    MalformedAmount,
    NegativeAmount,
    /// Value does not fit a 96-bit decimal mantissa.
    AmountTooLarge,
    EmptyVat,
    MalformedVat,
    VatOutOfRange,
    NegativeBase,
    UnitsNotPositive,
}

impl InputErrorKind {
    /// Stable, human-readable message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyDate => "empty date",
            Self::MalformedDate => "malformed date",
            Self::EmptyAmount => "empty amount",
            Self::MalformedAmount => "malformed amount",
            Self::NegativeAmount => "negative amount",
            Self::AmountTooLarge => "amount too large",
            Self::EmptyVat => "empty vat",
            Self::MalformedVat => "malformed vat",
            Self::VatOutOfRange => "vat out of range",
            Self::NegativeBase => "negative base",
            Self::UnitsNotPositive => "units must be positive",
        }
    }
}

/// A single rejected input with the raw text that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInput {
    /// What went wrong.
    pub kind: InputErrorKind,
    /// The offending raw input, when there is one worth echoing back.
    pub input: Option<String>,
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.input {
            Some(input) => write!(f, "{}: '{}'", self.kind.message(), input),
            None => f.write_str(self.kind.message()),
        }
    }
}

impl InvalidInput {
    /// Create an input error without echoing the raw text.
    pub fn new(kind: InputErrorKind) -> Self {
        Self { kind, input: None }
    }

    /// Create an input error that carries the offending raw text.
    pub fn with_input(kind: InputErrorKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: Some(input.into()),
        }
    }
}

impl From<InvalidInput> for FacturaError {
    fn from(e: InvalidInput) -> Self {
        tracing::debug!(reason = e.kind.message(), input = ?e.input, "rejected invoice input");
        Self::InvalidInput(e)
    }
}
