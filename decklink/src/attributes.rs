// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Identifier-keyed device properties: static attributes, live status and
//! library information.
//!
//! Each interface answers typed getters for a four-character identifier. The
//! named getters cover the identifiers applications commonly need; anything
//! else can be read by identifier.

use decklink_sys::{
    self as sys, BMDDeckLinkAPIInformationID, BMDDeckLinkAttributeID, BMDDeckLinkStatusID,
    IDeckLinkAPIInformation, IDeckLinkAttributes, IDeckLinkStatus,
};

use crate::{
    DeviceBusyState, DisplayMode, Error, Result, VideoIOSupport,
    buffer::{Buffer, take_string},
    ffi,
    unknown::ComPtr,
};

/// Generates the generic getters over a flat `*_get_*` function family.
macro_rules! property_getters {
    ($field:ident, $id:ty, $get_flag:path, $get_int:path $(, $get_float:path, $get_string:path)?) => {
        pub fn get_flag(&self, id: $id) -> Result<bool> {
            let mut value = false;
            Error::from_result(unsafe { $get_flag(self.$field.as_raw(), id, &mut value) })?;
            Ok(value)
        }

        pub fn get_int(&self, id: $id) -> Result<i64> {
            let mut value = 0;
            Error::from_result(unsafe { $get_int(self.$field.as_raw(), id, &mut value) })?;
            Ok(value)
        }

        $(
            pub fn get_float(&self, id: $id) -> Result<f64> {
                let mut value = 0.0;
                Error::from_result(unsafe { $get_float(self.$field.as_raw(), id, &mut value) })?;
                Ok(value)
            }

            /// Returns `None` if the property has no string value.
            pub fn get_string(&self, id: $id) -> Result<Option<String>> {
                let mut buffer: *mut Buffer = std::ptr::null_mut();
                Error::from_result(unsafe { $get_string(self.$field.as_raw(), id, &mut buffer) })?;
                Ok(unsafe { take_string(buffer) })
            }
        )?
    };
}

/// Static capabilities of a device (`IDeckLinkAttributes`).
pub struct Attributes {
    attributes: ComPtr<IDeckLinkAttributes>,
}

impl Attributes {
    pub fn from_ptr(attributes: ComPtr<IDeckLinkAttributes>) -> Self {
        Attributes { attributes }
    }

    property_getters!(
        attributes,
        BMDDeckLinkAttributeID,
        ffi::decklink_attributes_get_flag,
        ffi::decklink_attributes_get_int,
        ffi::decklink_attributes_get_float,
        ffi::decklink_attributes_get_string
    );

    pub fn get_supports_internal_keying(&self) -> Result<bool> {
        self.get_flag(sys::BMDDeckLinkSupportsInternalKeying)
    }

    pub fn get_supports_external_keying(&self) -> Result<bool> {
        self.get_flag(sys::BMDDeckLinkSupportsExternalKeying)
    }

    pub fn get_supports_input_format_detection(&self) -> Result<bool> {
        self.get_flag(sys::BMDDeckLinkSupportsInputFormatDetection)
    }

    pub fn get_has_serial_port(&self) -> Result<bool> {
        self.get_flag(sys::BMDDeckLinkHasSerialPort)
    }

    pub fn get_maximum_audio_channels(&self) -> Result<i64> {
        self.get_int(sys::BMDDeckLinkMaximumAudioChannels)
    }

    /// Stable across reboots; identifies the connector group of a device.
    pub fn get_persistent_id(&self) -> Result<i64> {
        self.get_int(sys::BMDDeckLinkPersistentID)
    }

    pub fn get_topological_id(&self) -> Result<i64> {
        self.get_int(sys::BMDDeckLinkTopologicalID)
    }

    pub fn get_number_of_subdevices(&self) -> Result<i64> {
        self.get_int(sys::BMDDeckLinkNumberOfSubDevices)
    }

    pub fn get_subdevice_index(&self) -> Result<i64> {
        self.get_int(sys::BMDDeckLinkSubDeviceIndex)
    }

    pub fn get_video_io_support(&self) -> Result<VideoIOSupport> {
        self.get_int(sys::BMDDeckLinkVideoIOSupport)
            .map(VideoIOSupport::from_bits_truncate)
    }

    pub fn get_model_name(&self) -> Result<Option<String>> {
        self.get_string(sys::BMDDeckLinkModelName)
    }

    pub fn get_vendor_name(&self) -> Result<Option<String>> {
        self.get_string(sys::BMDDeckLinkVendorName)
    }

    pub fn get_display_name(&self) -> Result<Option<String>> {
        self.get_string(sys::BMDDeckLinkDisplayName)
    }

    pub fn get_device_handle(&self) -> Result<Option<String>> {
        self.get_string(sys::BMDDeckLinkDeviceHandle)
    }
}

/// Live state of a device (`IDeckLinkStatus`).
pub struct Status {
    status: ComPtr<IDeckLinkStatus>,
}

impl Status {
    pub fn from_ptr(status: ComPtr<IDeckLinkStatus>) -> Self {
        Status { status }
    }

    property_getters!(
        status,
        BMDDeckLinkStatusID,
        ffi::decklink_status_get_flag,
        ffi::decklink_status_get_int
    );

    pub fn get_video_input_signal_locked(&self) -> Result<bool> {
        self.get_flag(sys::bmdDeckLinkStatusVideoInputSignalLocked)
    }

    pub fn get_reference_signal_locked(&self) -> Result<bool> {
        self.get_flag(sys::bmdDeckLinkStatusReferenceSignalLocked)
    }

    pub fn get_detected_video_input_mode(&self) -> Result<DisplayMode> {
        self.get_int(sys::bmdDeckLinkStatusDetectedVideoInputMode)
            .map(|mode| DisplayMode(mode as u32))
    }

    pub fn get_current_video_input_mode(&self) -> Result<DisplayMode> {
        self.get_int(sys::bmdDeckLinkStatusCurrentVideoInputMode)
            .map(|mode| DisplayMode(mode as u32))
    }

    pub fn get_current_video_output_mode(&self) -> Result<DisplayMode> {
        self.get_int(sys::bmdDeckLinkStatusCurrentVideoOutputMode)
            .map(|mode| DisplayMode(mode as u32))
    }

    pub fn get_busy(&self) -> Result<DeviceBusyState> {
        self.get_int(sys::bmdDeckLinkStatusBusy)
            .map(DeviceBusyState::from_bits_truncate)
    }

    /// On-board temperature in degrees Celsius.
    pub fn get_device_temperature(&self) -> Result<i64> {
        self.get_int(sys::bmdDeckLinkStatusDeviceTemperature)
    }
}

/// Information about the installed driver (`IDeckLinkAPIInformation`).
pub struct ApiInformation {
    info: ComPtr<IDeckLinkAPIInformation>,
}

impl ApiInformation {
    /// # Errors
    ///
    /// Returns [`Error::Other`] if the library or driver is not installed.
    pub fn new() -> Result<Self> {
        let info = unsafe { ffi::create_decklink_api_information_instance() };
        unsafe { ComPtr::from_raw(info) }
            .map(|info| ApiInformation { info })
            .ok_or_else(|| Error::Other("unable to create DeckLink API information".to_string()))
    }

    pub fn from_ptr(info: ComPtr<IDeckLinkAPIInformation>) -> Self {
        ApiInformation { info }
    }

    property_getters!(
        info,
        BMDDeckLinkAPIInformationID,
        ffi::decklink_api_information_get_flag,
        ffi::decklink_api_information_get_int,
        ffi::decklink_api_information_get_float,
        ffi::decklink_api_information_get_string
    );

    /// Driver version packed as `0xMMmmpp00`.
    pub fn get_version(&self) -> Result<i64> {
        self.get_int(sys::BMDDeckLinkAPIVersion)
    }

    /// Driver version as text, e.g. "12.4.1".
    pub fn get_version_string(&self) -> Result<Option<String>> {
        self.get_string(sys::BMDDeckLinkAPIVersion)
    }
}
