// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Dispatch library entry points.

use std::ptr;

use decklink_sys::{
    E_FAIL, HRESULT, IDeckLinkAPIInformation, IDeckLinkIterator, IDeckLinkVideoConversion,
};

use crate::api::shared_api;

/// Returns `E_FAIL`, for callers that cannot spell the constant themselves.
#[unsafe(no_mangle)]
pub extern "C" fn decklink_get_e_fail() -> HRESULT {
    E_FAIL
}

/// Returns `true` if the dispatch library could be loaded.
#[unsafe(no_mangle)]
pub extern "C" fn decklink_api_present() -> bool {
    shared_api().is_some()
}

/// Creates a device iterator. Null if the library or driver is missing.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn create_decklink_iterator_instance() -> *mut IDeckLinkIterator {
    match shared_api() {
        Some(api) => unsafe { api.create_decklink_iterator_instance() },
        None => ptr::null_mut(),
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn create_decklink_api_information_instance() -> *mut IDeckLinkAPIInformation {
    match shared_api() {
        Some(api) => unsafe { api.create_decklink_api_information_instance() },
        None => ptr::null_mut(),
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn create_decklink_video_conversion_instance() -> *mut IDeckLinkVideoConversion
{
    match shared_api() {
        Some(api) => unsafe { api.create_video_conversion_instance() },
        None => ptr::null_mut(),
    }
}
