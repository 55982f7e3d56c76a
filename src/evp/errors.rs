use std::fmt::{self, Display, Formatter};

use static_assertions::assert_impl_all;

use crate::error::Error;
use crate::report::{self, Severity};

/// ErrorKind categorizes possible errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    UnknownAlgorithm,
    InvalidConfiguration,
    AlreadyFinalized,
    AllocationFailure,
}

impl ErrorKind {
    fn as_str(&self) -> &'static str {
        use ErrorKind::*;
        match *self {
            UnknownAlgorithm => "unknown digest algorithm",
            InvalidConfiguration => "invalid configuration",
            AlreadyFinalized => "hasher already finalized",
            AllocationFailure => "allocation failure",
        }
    }

    /// Severity a rejection of this kind is reported at.
    pub fn severity(&self) -> Severity {
        use ErrorKind::*;
        match *self {
            UnknownAlgorithm | AllocationFailure => Severity::Error,
            InvalidConfiguration | AlreadyFinalized => Severity::Warn,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for ErrorKind {}

assert_impl_all!(ErrorKind: Display, std::error::Error, Send, Sync);

pub type HashError = Error<ErrorKind>;
pub type Result<T> = std::result::Result<T, HashError>;

/// Builds an error and reports it once at its kind's severity.
pub(crate) fn reject(kind: ErrorKind, message: impl Into<Box<str>>) -> HashError {
    let error = HashError::with_message(kind, message);
    report::report(kind.severity(), format_args!("{}", error));
    error
}

/// Same as [reject] for messages known at compile time.
pub(crate) fn reject_static(kind: ErrorKind, description: &'static str) -> HashError {
    let error = HashError::with_description(kind, description);
    report::report(kind.severity(), format_args!("{}", error));
    error
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_severity() {
        assert_eq!(Severity::Error, ErrorKind::UnknownAlgorithm.severity());
        assert_eq!(Severity::Warn, ErrorKind::InvalidConfiguration.severity());
        assert_eq!(Severity::Warn, ErrorKind::AlreadyFinalized.severity());
        assert_eq!(Severity::Error, ErrorKind::AllocationFailure.severity());
    }

    #[test]
    fn test_reject() {
        let error = reject(ErrorKind::InvalidConfiguration, format!("rate {} out of range", 7));
        assert_eq!(ErrorKind::InvalidConfiguration, error.kind());
        assert_eq!("invalid configuration: rate 7 out of range", error.to_string());

        let error = reject_static(ErrorKind::AlreadyFinalized, "update after finalize");
        assert_eq!("hasher already finalized: update after finalize", error.to_string());
    }
}
