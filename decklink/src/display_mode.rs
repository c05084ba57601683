// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Video standards supported by an input or output.

use decklink_sys::{IDeckLinkDisplayMode, IDeckLinkDisplayModeIterator, S_OK};

use crate::{
    DisplayMode, Error, FieldDominance, Result,
    buffer::{Buffer, take_string},
    ffi,
    unknown::ComPtr,
};

/// Iterates over the display modes of an [`Input`](crate::Input) or
/// [`Output`](crate::Output).
pub struct DisplayModeIterator {
    iterator: ComPtr<IDeckLinkDisplayModeIterator>,
}

impl DisplayModeIterator {
    pub fn from_ptr(iterator: ComPtr<IDeckLinkDisplayModeIterator>) -> Self {
        DisplayModeIterator { iterator }
    }
}

impl Iterator for DisplayModeIterator {
    type Item = DisplayModeInfo;

    fn next(&mut self) -> Option<DisplayModeInfo> {
        let mut mode: *mut IDeckLinkDisplayMode = std::ptr::null_mut();
        let result =
            unsafe { ffi::decklink_display_mode_iterator_next(self.iterator.as_raw(), &mut mode) };
        if result != S_OK {
            return None;
        }
        unsafe { ComPtr::from_raw(mode) }.map(DisplayModeInfo::from_ptr)
    }
}

/// One video standard: resolution, frame rate and field order.
pub struct DisplayModeInfo {
    mode: ComPtr<IDeckLinkDisplayMode>,
}

impl DisplayModeInfo {
    pub fn from_ptr(mode: ComPtr<IDeckLinkDisplayMode>) -> Self {
        DisplayModeInfo { mode }
    }

    pub fn as_ptr(&self) -> &ComPtr<IDeckLinkDisplayMode> {
        &self.mode
    }

    pub fn get_display_mode(&self) -> DisplayMode {
        DisplayMode(unsafe { ffi::decklink_display_mode_get_display_mode(self.mode.as_raw()) })
    }

    /// Human readable name, e.g. "1080p25".
    pub fn get_name(&self) -> Result<Option<String>> {
        let mut buffer: *mut Buffer = std::ptr::null_mut();
        Error::from_result(unsafe {
            ffi::decklink_display_mode_get_name(self.mode.as_raw(), &mut buffer)
        })?;
        Ok(unsafe { take_string(buffer) })
    }

    pub fn get_width(&self) -> i64 {
        i64::from(unsafe { ffi::decklink_display_mode_get_width(self.mode.as_raw()) })
    }

    pub fn get_height(&self) -> i64 {
        i64::from(unsafe { ffi::decklink_display_mode_get_height(self.mode.as_raw()) })
    }

    /// Returns `(frame_duration, time_scale)`; the rate is
    /// `time_scale / frame_duration` frames per second.
    pub fn get_frame_rate(&self) -> Result<(i64, i64)> {
        let mut frame_duration = 0;
        let mut time_scale = 0;
        Error::from_result(unsafe {
            ffi::decklink_display_mode_get_frame_rate(
                self.mode.as_raw(),
                &mut frame_duration,
                &mut time_scale,
            )
        })?;
        Ok((frame_duration, time_scale))
    }

    pub fn get_field_dominance(&self) -> FieldDominance {
        FieldDominance(unsafe { ffi::decklink_display_mode_get_field_dominance(self.mode.as_raw()) })
    }
}

impl std::fmt::Debug for DisplayModeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayModeInfo")
            .field("display_mode", &self.get_display_mode())
            .field("width", &self.get_width())
            .field("height", &self.get_height())
            .finish()
    }
}
