// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

use decklink_sys::IDeckLinkTimecode;

use crate::{
    Error, Result,
    buffer::{Buffer, take_string},
    ffi,
    unknown::ComPtr,
};

/// A SMPTE timecode attached to a frame.
pub struct Timecode {
    timecode: ComPtr<IDeckLinkTimecode>,
}

/// Decoded timecode fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TimecodeComponents {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
}

impl Timecode {
    pub fn from_ptr(timecode: ComPtr<IDeckLinkTimecode>) -> Self {
        Timecode { timecode }
    }

    pub fn get_components(&self) -> Result<TimecodeComponents> {
        let mut components = TimecodeComponents::default();
        Error::from_result(unsafe {
            ffi::decklink_timecode_get_components(
                self.timecode.as_raw(),
                &mut components.hours,
                &mut components.minutes,
                &mut components.seconds,
                &mut components.frames,
            )
        })?;
        Ok(components)
    }

    /// The timecode as `hh:mm:ss:ff` (`;` before the frames for drop-frame).
    pub fn get_string(&self) -> Result<Option<String>> {
        let mut buffer: *mut Buffer = std::ptr::null_mut();
        Error::from_result(unsafe {
            ffi::decklink_timecode_get_string(self.timecode.as_raw(), &mut buffer)
        })?;
        Ok(unsafe { take_string(buffer) })
    }
}
