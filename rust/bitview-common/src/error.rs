use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// Operand at position `operand` of a composite disagrees with the domain size
    /// established by the first operand.
    pub fn domain_mismatch(operand: usize, expected: u32, actual: u32) -> Error {
        Error(
            ErrorKind::DomainMismatch {
                operand,
                expected,
                actual,
            }
            .into(),
        )
    }

    pub fn index_out_of_bounds(index: u32, max_size: u32) -> Error {
        Error(ErrorKind::IndexOutOfBounds { index, max_size }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("operand {operand} has max size {actual}, expected {expected}")]
    DomainMismatch {
        operand: usize,
        expected: u32,
        actual: u32,
    },

    #[error("index {index} is out of bounds for max size {max_size}")]
    IndexOutOfBounds { index: u32, max_size: u32 },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
