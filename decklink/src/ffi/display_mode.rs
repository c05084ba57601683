// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

use std::ffi::c_long;

use decklink_sys::{
    BMDDisplayMode, BMDFieldDominance, BMDTimeScale, BMDTimeValue, HRESULT, IDeckLinkDisplayMode,
    IDeckLinkDisplayModeIterator,
};

use crate::{buffer::Buffer, marshal::StringArg};

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_display_mode_iterator_next(
    iterator: *mut IDeckLinkDisplayModeIterator,
    decklink_display_mode: *mut *mut IDeckLinkDisplayMode,
) -> HRESULT {
    unsafe { vcall!(iterator, Next, decklink_display_mode) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_display_mode_get_display_mode(
    mode: *mut IDeckLinkDisplayMode,
) -> BMDDisplayMode {
    unsafe { vcall!(mode, GetDisplayMode) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_display_mode_get_name(
    mode: *mut IDeckLinkDisplayMode,
    value: *mut *mut Buffer,
) -> HRESULT {
    let mut arg = unsafe { StringArg::new(value) };
    unsafe { vcall!(mode, GetName, arg.as_out_ptr()) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_display_mode_get_width(mode: *mut IDeckLinkDisplayMode) -> c_long {
    unsafe { vcall!(mode, GetWidth) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_display_mode_get_height(
    mode: *mut IDeckLinkDisplayMode,
) -> c_long {
    unsafe { vcall!(mode, GetHeight) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_display_mode_get_frame_rate(
    mode: *mut IDeckLinkDisplayMode,
    frame_duration: *mut BMDTimeValue,
    time_scale: *mut BMDTimeScale,
) -> HRESULT {
    unsafe { vcall!(mode, GetFrameRate, frame_duration, time_scale) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_display_mode_get_field_dominance(
    mode: *mut IDeckLinkDisplayMode,
) -> BMDFieldDominance {
    unsafe { vcall!(mode, GetFieldDominance) }
}
