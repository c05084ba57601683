// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Pixel format conversion between frames.

use decklink_sys::IDeckLinkVideoConversion;

use crate::{Error, MutableVideoFrame, Result, VideoFrame, ffi, unknown::ComPtr};

/// Converts frames between pixel formats using the driver's converter.
///
/// # Examples
///
/// ```no_run
/// use decklink::{VideoConversion, VideoFrame};
///
/// # fn convert(
/// #     captured: &decklink::VideoInputFrame,
/// #     out: &mut decklink::MutableVideoFrame,
/// # ) -> Result<(), decklink::Error> {
/// let conversion = VideoConversion::new()?;
/// conversion.convert_frame(captured, out)?;
/// # Ok(())
/// # }
/// ```
pub struct VideoConversion {
    conversion: ComPtr<IDeckLinkVideoConversion>,
}

impl VideoConversion {
    /// # Errors
    ///
    /// Returns [`Error::Other`] if the library or driver is not installed.
    pub fn new() -> Result<Self> {
        let conversion = unsafe { ffi::create_decklink_video_conversion_instance() };
        unsafe { ComPtr::from_raw(conversion) }
            .map(Self::from_ptr)
            .ok_or_else(|| Error::Other("unable to create DeckLink video conversion".to_string()))
    }

    pub fn from_ptr(conversion: ComPtr<IDeckLinkVideoConversion>) -> Self {
        VideoConversion { conversion }
    }

    /// Converts `src` into the pixel format and memory of `dst`. Both frames
    /// must have the same dimensions.
    pub fn convert_frame(&self, src: &impl VideoFrame, dst: &mut MutableVideoFrame) -> Result<()> {
        Error::from_result(unsafe {
            ffi::decklink_video_conversion_convert_frame(
                self.conversion.as_raw(),
                src.as_frame_ptr(),
                dst.as_frame_ptr(),
            )
        })
    }
}
