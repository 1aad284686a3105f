//! Error types for mobileesp.
//!
//! Classification itself is total and never fails. Errors only show up
//! at the edges, e.g. when parsing a device tier or tier overwrites
//! received from a client. For those cases the [`BoxError`] alias and the
//! type-erased [`OpaqueError`] are used, as it is rarely important
//! what specific error was returned, only that one occurred.
//!
//! # mobileesp
//!
//! Crate used by the end-user `mobileesp` crate and its member crates alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use std::{
    error::Error as StdError,
    fmt::{self, Debug, Display},
};

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn StdError + Send + Sync>;

#[repr(transparent)]
/// A type-erased error type that can be used as a trait object.
///
/// Used by `mobileesp` to hide the concrete error type
/// of the (few) fallible operations it exposes.
pub struct OpaqueError(BoxError);

impl OpaqueError {
    /// create an [`OpaqueError`] from an std error
    pub fn from_std(error: impl StdError + Send + Sync + 'static) -> Self {
        Self(Box::new(error))
    }

    /// create an [`OpaqueError`] from a display object
    pub fn from_display(msg: impl Display + Debug + Send + Sync + 'static) -> Self {
        Self::from_std(MessageError(msg))
    }

    /// create an [`OpaqueError`] from a boxed error
    #[must_use]
    pub fn from_boxed(inner: BoxError) -> Self {
        Self(inner)
    }

    /// consume the [`OpaqueError`] and return the inner [`BoxError`]
    #[must_use]
    pub fn into_boxed(self) -> BoxError {
        self.0
    }
}

impl Debug for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl StdError for OpaqueError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<BoxError> for OpaqueError {
    fn from(inner: BoxError) -> Self {
        Self(inner)
    }
}

#[repr(transparent)]
/// An error type that wraps a message.
struct MessageError<M>(M);

impl<M> Debug for MessageError<M>
where
    M: Display + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<M> Display for MessageError<M>
where
    M: Display + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<M> StdError for MessageError<M> where M: Display + Debug + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct CustomError;

    impl Display for CustomError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "custom error")
        }
    }

    impl StdError for CustomError {}

    #[test]
    fn test_opaque_error_from_display() {
        let error = OpaqueError::from_display("invalid device tier: foo");
        assert_eq!(error.to_string(), "invalid device tier: foo");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_opaque_error_from_std() {
        let error = OpaqueError::from_std(CustomError);
        assert_eq!(error.to_string(), "custom error");
        assert!(error.into_boxed().downcast_ref::<CustomError>().is_some());
    }

    #[test]
    fn test_opaque_error_from_boxed() {
        let boxed: BoxError = Box::new(CustomError);
        let error: OpaqueError = boxed.into();
        assert_eq!(format!("{error:?}"), "CustomError");
    }
}
