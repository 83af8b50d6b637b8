//! Domain-specific errors for the teller backend.
//!
//! Contains error variants for the failure cases the teller can hit:
//! - Registration errors (account already exists)
//! - Request validation errors (unknown account, non-positive amount,
//!   missing request field)
//! - Balance-rule errors (insufficient funds)
//! - Ledger export errors (the destination refused the write)
//!
//! [`ErrorKind`] groups the variants into the two caller-facing tiers:
//! a malformed request has no effect and must be fixed by the caller,
//! while a business-rule rejection may legitimately be retried once the
//! account state changes.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    AccountAlreadyExists,
    AccountNotFound,
    AmountMustBePositive,
    InsufficientFunds,
    InvalidRequest,
    Io(io::Error),
}

/// Failure tier of an [`Error`], as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself is invalid: duplicate registration, unknown
    /// account reference, non-positive amount, or a missing field.
    InvalidRequest,
    /// A valid request rejected by the current account state.
    BusinessRule,
    /// The ledger export destination failed to accept the write.
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AccountAlreadyExists
            | Error::AccountNotFound
            | Error::AmountMustBePositive
            | Error::InvalidRequest => ErrorKind::InvalidRequest,
            Error::InsufficientFunds => ErrorKind::BusinessRule,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AccountAlreadyExists => {
                write!(f, "an account already exists for this card number and PIN")
            }
            Error::AccountNotFound => write!(f, "no account exists for this card number and PIN"),
            Error::AmountMustBePositive => write!(f, "amount must be positive"),
            Error::InsufficientFunds => write!(f, "insufficient funds"),
            Error::InvalidRequest => write!(f, "request is missing a required field"),
            Error::Io(err) => write!(f, "ledger export failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::AccountAlreadyExists.kind(), ErrorKind::InvalidRequest);
        assert_eq!(Error::AccountNotFound.kind(), ErrorKind::InvalidRequest);
        assert_eq!(Error::AmountMustBePositive.kind(), ErrorKind::InvalidRequest);
        assert_eq!(Error::InvalidRequest.kind(), ErrorKind::InvalidRequest);
        assert_eq!(Error::InsufficientFunds.kind(), ErrorKind::BusinessRule);
        let io_err = io::Error::new(io::ErrorKind::Other, "sink closed");
        assert_eq!(Error::Io(io_err).kind(), ErrorKind::Io);
    }
}
