// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Device enumeration, naming, attributes and status.

use decklink_sys::{
    BMDDeckLinkAPIInformationID, BMDDeckLinkAttributeID, BMDDeckLinkStatusID, HRESULT, IDeckLink,
    IDeckLinkAPIInformation, IDeckLinkAttributes, IDeckLinkIterator, IDeckLinkStatus,
};

use crate::{buffer::Buffer, marshal::StringArg};

/// Advances the iterator. `S_FALSE` with a null device marks the end.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_iterator_next(
    iterator: *mut IDeckLinkIterator,
    decklink_instance: *mut *mut IDeckLink,
) -> HRESULT {
    unsafe { vcall!(iterator, Next, decklink_instance) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_get_model_name(
    decklink: *mut IDeckLink,
    name: *mut *mut Buffer,
) -> HRESULT {
    let mut arg = unsafe { StringArg::new(name) };
    unsafe { vcall!(decklink, GetModelName, arg.as_out_ptr()) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_get_display_name(
    decklink: *mut IDeckLink,
    name: *mut *mut Buffer,
) -> HRESULT {
    let mut arg = unsafe { StringArg::new(name) };
    unsafe { vcall!(decklink, GetDisplayName, arg.as_out_ptr()) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_attributes_get_flag(
    attr: *mut IDeckLinkAttributes,
    cfg_id: BMDDeckLinkAttributeID,
    value: *mut bool,
) -> HRESULT {
    unsafe { vcall!(attr, GetFlag, cfg_id, value) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_attributes_get_int(
    attr: *mut IDeckLinkAttributes,
    cfg_id: BMDDeckLinkAttributeID,
    value: *mut i64,
) -> HRESULT {
    unsafe { vcall!(attr, GetInt, cfg_id, value) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_attributes_get_float(
    attr: *mut IDeckLinkAttributes,
    cfg_id: BMDDeckLinkAttributeID,
    value: *mut f64,
) -> HRESULT {
    unsafe { vcall!(attr, GetFloat, cfg_id, value) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_attributes_get_string(
    attr: *mut IDeckLinkAttributes,
    cfg_id: BMDDeckLinkAttributeID,
    value: *mut *mut Buffer,
) -> HRESULT {
    let mut arg = unsafe { StringArg::new(value) };
    unsafe { vcall!(attr, GetString, cfg_id, arg.as_out_ptr()) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_status_get_flag(
    status: *mut IDeckLinkStatus,
    status_id: BMDDeckLinkStatusID,
    value: *mut bool,
) -> HRESULT {
    unsafe { vcall!(status, GetFlag, status_id, value) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_status_get_int(
    status: *mut IDeckLinkStatus,
    status_id: BMDDeckLinkStatusID,
    value: *mut i64,
) -> HRESULT {
    unsafe { vcall!(status, GetInt, status_id, value) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_api_information_get_flag(
    info: *mut IDeckLinkAPIInformation,
    cfg_id: BMDDeckLinkAPIInformationID,
    value: *mut bool,
) -> HRESULT {
    unsafe { vcall!(info, GetFlag, cfg_id, value) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_api_information_get_int(
    info: *mut IDeckLinkAPIInformation,
    cfg_id: BMDDeckLinkAPIInformationID,
    value: *mut i64,
) -> HRESULT {
    unsafe { vcall!(info, GetInt, cfg_id, value) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_api_information_get_float(
    info: *mut IDeckLinkAPIInformation,
    cfg_id: BMDDeckLinkAPIInformationID,
    value: *mut f64,
) -> HRESULT {
    unsafe { vcall!(info, GetFloat, cfg_id, value) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_api_information_get_string(
    info: *mut IDeckLinkAPIInformation,
    cfg_id: BMDDeckLinkAPIInformationID,
    value: *mut *mut Buffer,
) -> HRESULT {
    let mut arg = unsafe { StringArg::new(value) };
    unsafe { vcall!(info, GetString, cfg_id, arg.as_out_ptr()) }
}
