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

    pub fn range_out_of_bounds(start: usize, span: usize, len: usize) -> Error {
        Error(ErrorKind::RangeOutOfBounds { start, span, len }.into())
    }

    pub fn dest_too_small(required: usize, available: usize) -> Error {
        Error(
            ErrorKind::DestTooSmall {
                required,
                available,
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("range [{start}, {start} + {span}) out of bounds for span of {len} elements")]
    RangeOutOfBounds {
        start: usize,
        span: usize,
        len: usize,
    },

    #[error("destination span too small: required {required} elements, available {available}")]
    DestTooSmall { required: usize, available: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
