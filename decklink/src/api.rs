// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Loading of the DeckLink dispatch library.

use std::{
    ffi::OsStr,
    sync::{Arc, OnceLock},
};

use decklink_sys::DeckLinkApi;
use tracing::{debug, warn};

use crate::{Result, config::get_decklink_api_path};

/// Shared handle to a loaded dispatch library.
pub type DeckLinkApiHandle = Arc<DeckLinkApi>;

/// Loads the DeckLink dispatch library and resolves its entry points.
///
/// # Errors
///
/// Returns [`crate::Error::LibLoading`] if the library cannot be opened or
/// does not export the expected factory functions.
///
/// # Examples
///
/// ```no_run
/// use decklink::load_api;
///
/// # fn main() -> Result<(), decklink::Error> {
/// let api = load_api("libDeckLinkAPI.so")?;
/// # Ok(())
/// # }
/// ```
pub fn load_api(path: impl AsRef<OsStr>) -> Result<DeckLinkApiHandle> {
    let path = path.as_ref();
    // Safety: the library is the vendor dispatch library; its entry points are
    // resolved with the signatures declared in `decklink-sys`.
    let api = unsafe { DeckLinkApi::new(path) }?;
    debug!(?path, "loaded DeckLink API library");
    Ok(Arc::new(api))
}

static SHARED_API: OnceLock<Option<DeckLinkApiHandle>> = OnceLock::new();

/// Returns the process-wide library instance used by the flat factory
/// functions, loading it from [`get_decklink_api_path`] on first use.
///
/// Returns `None` when the library is not installed. The failure is logged
/// once and not retried.
pub fn shared_api() -> Option<&'static DeckLinkApiHandle> {
    SHARED_API
        .get_or_init(|| {
            let path = get_decklink_api_path();
            match load_api(&path) {
                Ok(api) => Some(api),
                Err(error) => {
                    warn!(path = %path.display(), %error, "DeckLink API library is not available");
                    None
                }
            }
        })
        .as_ref()
}
