// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for DeckLink operations.
//!
//! This module maps the COM-style `HRESULT` codes returned by the DeckLink
//! runtime to an idiomatic Rust error enum, and back again when a Rust
//! callback handler has to report a failure to the runtime.

use decklink_sys::{
    E_ABORT, E_ACCESSDENIED, E_FAIL, E_HANDLE, E_INVALIDARG, E_NOINTERFACE, E_NOTIMPL,
    E_OUTOFMEMORY, E_POINTER, E_UNEXPECTED, HRESULT, S_FALSE, S_OK,
};

/// Convenience result type using [`Error`] as the error variant.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when using the DeckLink API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unspecified failure (`E_FAIL`).
    #[error("Unspecified failure")]
    Fail,

    /// One or more arguments are invalid (`E_INVALIDARG`).
    #[error("Invalid argument")]
    InvalidArg,

    /// The object does not implement the requested interface (`E_NOINTERFACE`).
    #[error("No such interface supported")]
    NoInterface,

    /// The operation is not implemented by this device or driver (`E_NOTIMPL`).
    #[error("Not implemented")]
    NotImplemented,

    #[error("Out of memory")]
    OutOfMemory,

    /// A required pointer was null (`E_POINTER`).
    #[error("Invalid pointer")]
    InvalidPointer,

    #[error("Invalid handle")]
    InvalidHandle,

    #[error("Operation aborted")]
    Aborted,

    /// The device is in use or the operation is not permitted (`E_ACCESSDENIED`).
    #[error("Access denied")]
    AccessDenied,

    #[error("Unexpected failure")]
    Unexpected,

    /// A result code without a dedicated variant.
    #[error("Unknown error: {0:#010x}")]
    Unknown(HRESULT),

    /// A generic error for Rust-level failures not directly mapped to a result code.
    #[error("Other error: {0}")]
    Other(String),

    /// Failed to load the DeckLink dispatch library.
    #[error("Loading library: {0}")]
    LibLoading(#[from] libloading::Error),
}

impl Error {
    /// Converts a DeckLink result code to a Rust [`Result`].
    ///
    /// # Returns
    ///
    /// - `Ok(())` if `result == S_OK`
    /// - `Err(Error::...)` for every other code, including `S_FALSE`
    ///
    /// # Examples
    ///
    /// ```
    /// use decklink::Error;
    ///
    /// assert!(Error::from_result(decklink_sys::S_OK).is_ok());
    /// assert!(matches!(
    ///     Error::from_result(decklink_sys::E_NOINTERFACE),
    ///     Err(Error::NoInterface)
    /// ));
    /// ```
    pub fn from_result(result: HRESULT) -> Result<()> {
        match result {
            S_OK => Ok(()),
            E_FAIL => Err(Error::Fail),
            E_INVALIDARG => Err(Error::InvalidArg),
            E_NOINTERFACE => Err(Error::NoInterface),
            E_NOTIMPL => Err(Error::NotImplemented),
            E_OUTOFMEMORY => Err(Error::OutOfMemory),
            E_POINTER => Err(Error::InvalidPointer),
            E_HANDLE => Err(Error::InvalidHandle),
            E_ABORT => Err(Error::Aborted),
            E_ACCESSDENIED => Err(Error::AccessDenied),
            E_UNEXPECTED => Err(Error::Unexpected),
            other => Err(Error::Unknown(other)),
        }
    }

    /// Like [`Error::from_result`], but treats `S_FALSE` as a successful
    /// "nothing there" answer.
    ///
    /// Returns `Ok(true)` for `S_OK` and `Ok(false)` for `S_FALSE`.
    pub fn from_optional_result(result: HRESULT) -> Result<bool> {
        match result {
            S_FALSE => Ok(false),
            other => Error::from_result(other).map(|()| true),
        }
    }

    /// Returns the result code reported to the DeckLink runtime for this error.
    ///
    /// Errors without a vendor equivalent are reported as `E_FAIL`.
    pub fn result_code(&self) -> HRESULT {
        match self {
            Error::Fail => E_FAIL,
            Error::InvalidArg => E_INVALIDARG,
            Error::NoInterface => E_NOINTERFACE,
            Error::NotImplemented => E_NOTIMPL,
            Error::OutOfMemory => E_OUTOFMEMORY,
            Error::InvalidPointer => E_POINTER,
            Error::InvalidHandle => E_HANDLE,
            Error::Aborted => E_ABORT,
            Error::AccessDenied => E_ACCESSDENIED,
            Error::Unexpected => E_UNEXPECTED,
            Error::Unknown(result) => *result,
            Error::Other(_) | Error::LibLoading(_) => E_FAIL,
        }
    }
}
