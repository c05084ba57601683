// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Interface structs and their virtual method tables.
//!
//! Every interface is a struct holding a single pointer to its vtable. Vtable
//! entries follow the declaration order of the vendor headers. The vendor
//! interfaces declare a protected virtual destructor after their methods; under
//! the Itanium ABI that destructor occupies two slots (complete and deleting),
//! so a derived interface's own methods start after those two slots.

use std::os::raw::c_void;

use crate::*;

/// Marker for interface structs whose vtable starts with [`IUnknownVtbl`].
///
/// # Safety
///
/// Implementors must be `#[repr(C)]` structs whose first field is a pointer to
/// a vtable beginning with the three `IUnknown` methods.
pub unsafe trait ComInterface {}

/// Interfaces that can be requested through `QueryInterface`.
///
/// # Safety
///
/// `IID` must be the identity the native runtime answers with this interface.
pub unsafe trait ComInterfaceId: ComInterface {
    const IID: REFIID;
}

/// Vtable slot of a vendor destructor. Never invoked through this ABI.
pub type Destructor = Option<unsafe extern "system" fn(this: *mut c_void)>;

macro_rules! com_interface {
    ($(#[$meta:meta])* $name:ident => $vtbl:ident) => {
        $(#[$meta])*
        #[repr(C)]
        pub struct $name {
            pub vtbl: *const $vtbl,
        }

        unsafe impl ComInterface for $name {}
    };
    ($(#[$meta:meta])* $name:ident => $vtbl:ident, $iid:expr) => {
        com_interface!($(#[$meta])* $name => $vtbl);

        unsafe impl ComInterfaceId for $name {
            const IID: REFIID = $iid;
        }
    };
}

com_interface!(
    /// Base of every DeckLink interface.
    IUnknown => IUnknownVtbl, IID_IUnknown
);

#[repr(C)]
pub struct IUnknownVtbl {
    pub QueryInterface:
        unsafe extern "system" fn(this: *mut IUnknown, iid: REFIID, ppv: *mut LPVOID) -> HRESULT,
    pub AddRef: unsafe extern "system" fn(this: *mut IUnknown) -> ULONG,
    pub Release: unsafe extern "system" fn(this: *mut IUnknown) -> ULONG,
}

com_interface!(IDeckLinkIterator => IDeckLinkIteratorVtbl);

#[repr(C)]
pub struct IDeckLinkIteratorVtbl {
    pub base: IUnknownVtbl,
    pub Next: unsafe extern "system" fn(
        this: *mut IDeckLinkIterator,
        deckLinkInstance: *mut *mut IDeckLink,
    ) -> HRESULT,
}

com_interface!(IDeckLink => IDeckLinkVtbl);

#[repr(C)]
pub struct IDeckLinkVtbl {
    pub base: IUnknownVtbl,
    pub GetModelName:
        unsafe extern "system" fn(this: *mut IDeckLink, modelName: *mut DLString) -> HRESULT,
    pub GetDisplayName:
        unsafe extern "system" fn(this: *mut IDeckLink, displayName: *mut DLString) -> HRESULT,
}

com_interface!(
    /// `IDeckLinkAttributes_v10_11`.
    IDeckLinkAttributes => IDeckLinkAttributesVtbl, IID_IDeckLinkAttributes
);

#[repr(C)]
pub struct IDeckLinkAttributesVtbl {
    pub base: IUnknownVtbl,
    pub GetFlag: unsafe extern "system" fn(
        this: *mut IDeckLinkAttributes,
        cfgID: BMDDeckLinkAttributeID,
        value: *mut bool,
    ) -> HRESULT,
    pub GetInt: unsafe extern "system" fn(
        this: *mut IDeckLinkAttributes,
        cfgID: BMDDeckLinkAttributeID,
        value: *mut i64,
    ) -> HRESULT,
    pub GetFloat: unsafe extern "system" fn(
        this: *mut IDeckLinkAttributes,
        cfgID: BMDDeckLinkAttributeID,
        value: *mut f64,
    ) -> HRESULT,
    pub GetString: unsafe extern "system" fn(
        this: *mut IDeckLinkAttributes,
        cfgID: BMDDeckLinkAttributeID,
        value: *mut DLString,
    ) -> HRESULT,
}

com_interface!(IDeckLinkStatus => IDeckLinkStatusVtbl, IID_IDeckLinkStatus);

#[repr(C)]
pub struct IDeckLinkStatusVtbl {
    pub base: IUnknownVtbl,
    pub GetFlag: unsafe extern "system" fn(
        this: *mut IDeckLinkStatus,
        statusID: BMDDeckLinkStatusID,
        value: *mut bool,
    ) -> HRESULT,
    pub GetInt: unsafe extern "system" fn(
        this: *mut IDeckLinkStatus,
        statusID: BMDDeckLinkStatusID,
        value: *mut i64,
    ) -> HRESULT,
    pub GetFloat: unsafe extern "system" fn(
        this: *mut IDeckLinkStatus,
        statusID: BMDDeckLinkStatusID,
        value: *mut f64,
    ) -> HRESULT,
    pub GetString: unsafe extern "system" fn(
        this: *mut IDeckLinkStatus,
        statusID: BMDDeckLinkStatusID,
        value: *mut DLString,
    ) -> HRESULT,
    pub GetBytes: unsafe extern "system" fn(
        this: *mut IDeckLinkStatus,
        statusID: BMDDeckLinkStatusID,
        buffer: *mut c_void,
        bufferSize: *mut u32,
    ) -> HRESULT,
}

com_interface!(IDeckLinkAPIInformation => IDeckLinkAPIInformationVtbl);

#[repr(C)]
pub struct IDeckLinkAPIInformationVtbl {
    pub base: IUnknownVtbl,
    pub GetFlag: unsafe extern "system" fn(
        this: *mut IDeckLinkAPIInformation,
        cfgID: BMDDeckLinkAPIInformationID,
        value: *mut bool,
    ) -> HRESULT,
    pub GetInt: unsafe extern "system" fn(
        this: *mut IDeckLinkAPIInformation,
        cfgID: BMDDeckLinkAPIInformationID,
        value: *mut i64,
    ) -> HRESULT,
    pub GetFloat: unsafe extern "system" fn(
        this: *mut IDeckLinkAPIInformation,
        cfgID: BMDDeckLinkAPIInformationID,
        value: *mut f64,
    ) -> HRESULT,
    pub GetString: unsafe extern "system" fn(
        this: *mut IDeckLinkAPIInformation,
        cfgID: BMDDeckLinkAPIInformationID,
        value: *mut DLString,
    ) -> HRESULT,
}

com_interface!(IDeckLinkDisplayModeIterator => IDeckLinkDisplayModeIteratorVtbl);

#[repr(C)]
pub struct IDeckLinkDisplayModeIteratorVtbl {
    pub base: IUnknownVtbl,
    pub Next: unsafe extern "system" fn(
        this: *mut IDeckLinkDisplayModeIterator,
        deckLinkDisplayMode: *mut *mut IDeckLinkDisplayMode,
    ) -> HRESULT,
}

com_interface!(IDeckLinkDisplayMode => IDeckLinkDisplayModeVtbl);

#[repr(C)]
pub struct IDeckLinkDisplayModeVtbl {
    pub base: IUnknownVtbl,
    pub GetName:
        unsafe extern "system" fn(this: *mut IDeckLinkDisplayMode, name: *mut DLString) -> HRESULT,
    pub GetDisplayMode: unsafe extern "system" fn(this: *mut IDeckLinkDisplayMode) -> BMDDisplayMode,
    pub GetWidth: unsafe extern "system" fn(this: *mut IDeckLinkDisplayMode) -> LONG,
    pub GetHeight: unsafe extern "system" fn(this: *mut IDeckLinkDisplayMode) -> LONG,
    pub GetFrameRate: unsafe extern "system" fn(
        this: *mut IDeckLinkDisplayMode,
        frameDuration: *mut BMDTimeValue,
        timeScale: *mut BMDTimeScale,
    ) -> HRESULT,
    pub GetFieldDominance:
        unsafe extern "system" fn(this: *mut IDeckLinkDisplayMode) -> BMDFieldDominance,
    pub GetFlags: unsafe extern "system" fn(this: *mut IDeckLinkDisplayMode) -> BMDDisplayModeFlags,
}

com_interface!(IDeckLinkVideoFrame => IDeckLinkVideoFrameVtbl);

#[repr(C)]
pub struct IDeckLinkVideoFrameVtbl {
    pub base: IUnknownVtbl,
    pub GetWidth: unsafe extern "system" fn(this: *mut IDeckLinkVideoFrame) -> LONG,
    pub GetHeight: unsafe extern "system" fn(this: *mut IDeckLinkVideoFrame) -> LONG,
    pub GetRowBytes: unsafe extern "system" fn(this: *mut IDeckLinkVideoFrame) -> LONG,
    pub GetPixelFormat: unsafe extern "system" fn(this: *mut IDeckLinkVideoFrame) -> BMDPixelFormat,
    pub GetFlags: unsafe extern "system" fn(this: *mut IDeckLinkVideoFrame) -> BMDFrameFlags,
    pub GetBytes:
        unsafe extern "system" fn(this: *mut IDeckLinkVideoFrame, buffer: *mut LPVOID) -> HRESULT,
    pub GetTimecode: unsafe extern "system" fn(
        this: *mut IDeckLinkVideoFrame,
        format: BMDTimecodeFormat,
        timecode: *mut *mut IDeckLinkTimecode,
    ) -> HRESULT,
    pub GetAncillaryData:
        unsafe extern "system" fn(this: *mut IDeckLinkVideoFrame, ancillary: *mut LPVOID) -> HRESULT,
}

com_interface!(IDeckLinkMutableVideoFrame => IDeckLinkMutableVideoFrameVtbl);

#[repr(C)]
pub struct IDeckLinkMutableVideoFrameVtbl {
    pub base: IDeckLinkVideoFrameVtbl,
    pub Destructors: [Destructor; 2],
    pub SetFlags: unsafe extern "system" fn(
        this: *mut IDeckLinkMutableVideoFrame,
        newFlags: BMDFrameFlags,
    ) -> HRESULT,
    pub SetTimecode: unsafe extern "system" fn(
        this: *mut IDeckLinkMutableVideoFrame,
        format: BMDTimecodeFormat,
        timecode: *mut IDeckLinkTimecode,
    ) -> HRESULT,
    pub SetTimecodeFromComponents: unsafe extern "system" fn(
        this: *mut IDeckLinkMutableVideoFrame,
        format: BMDTimecodeFormat,
        hours: u8,
        minutes: u8,
        seconds: u8,
        frames: u8,
        flags: BMDTimecodeFlags,
    ) -> HRESULT,
    pub SetAncillaryData: unsafe extern "system" fn(
        this: *mut IDeckLinkMutableVideoFrame,
        ancillary: *mut c_void,
    ) -> HRESULT,
    pub SetTimecodeUserBits: unsafe extern "system" fn(
        this: *mut IDeckLinkMutableVideoFrame,
        format: BMDTimecodeFormat,
        userBits: BMDTimecodeUserBits,
    ) -> HRESULT,
}

com_interface!(IDeckLinkVideoInputFrame => IDeckLinkVideoInputFrameVtbl);

#[repr(C)]
pub struct IDeckLinkVideoInputFrameVtbl {
    pub base: IDeckLinkVideoFrameVtbl,
    pub Destructors: [Destructor; 2],
    pub GetStreamTime: unsafe extern "system" fn(
        this: *mut IDeckLinkVideoInputFrame,
        frameTime: *mut BMDTimeValue,
        frameDuration: *mut BMDTimeValue,
        timeScale: BMDTimeScale,
    ) -> HRESULT,
    pub GetHardwareReferenceTimestamp: unsafe extern "system" fn(
        this: *mut IDeckLinkVideoInputFrame,
        timeScale: BMDTimeScale,
        frameTime: *mut BMDTimeValue,
        frameDuration: *mut BMDTimeValue,
    ) -> HRESULT,
}

com_interface!(IDeckLinkAudioInputPacket => IDeckLinkAudioInputPacketVtbl);

#[repr(C)]
pub struct IDeckLinkAudioInputPacketVtbl {
    pub base: IUnknownVtbl,
    pub GetSampleFrameCount: unsafe extern "system" fn(this: *mut IDeckLinkAudioInputPacket) -> LONG,
    pub GetBytes: unsafe extern "system" fn(
        this: *mut IDeckLinkAudioInputPacket,
        buffer: *mut LPVOID,
    ) -> HRESULT,
    pub GetPacketTime: unsafe extern "system" fn(
        this: *mut IDeckLinkAudioInputPacket,
        packetTime: *mut BMDTimeValue,
        timeScale: BMDTimeScale,
    ) -> HRESULT,
}

com_interface!(IDeckLinkTimecode => IDeckLinkTimecodeVtbl);

#[repr(C)]
pub struct IDeckLinkTimecodeVtbl {
    pub base: IUnknownVtbl,
    pub GetBCD: unsafe extern "system" fn(this: *mut IDeckLinkTimecode) -> BMDTimecodeBCD,
    pub GetComponents: unsafe extern "system" fn(
        this: *mut IDeckLinkTimecode,
        hours: *mut u8,
        minutes: *mut u8,
        seconds: *mut u8,
        frames: *mut u8,
    ) -> HRESULT,
    pub GetString:
        unsafe extern "system" fn(this: *mut IDeckLinkTimecode, timecode: *mut DLString) -> HRESULT,
    pub GetFlags: unsafe extern "system" fn(this: *mut IDeckLinkTimecode) -> BMDTimecodeFlags,
    pub GetTimecodeUserBits: unsafe extern "system" fn(
        this: *mut IDeckLinkTimecode,
        userBits: *mut BMDTimecodeUserBits,
    ) -> HRESULT,
}

com_interface!(IDeckLinkVideoConversion => IDeckLinkVideoConversionVtbl);

#[repr(C)]
pub struct IDeckLinkVideoConversionVtbl {
    pub base: IUnknownVtbl,
    pub ConvertFrame: unsafe extern "system" fn(
        this: *mut IDeckLinkVideoConversion,
        srcFrame: *mut IDeckLinkVideoFrame,
        dstFrame: *mut IDeckLinkVideoFrame,
    ) -> HRESULT,
}

com_interface!(
    /// `IDeckLinkInput_v10_11`.
    IDeckLinkInput => IDeckLinkInputVtbl, IID_IDeckLinkInput
);

#[repr(C)]
pub struct IDeckLinkInputVtbl {
    pub base: IUnknownVtbl,
    pub DoesSupportVideoMode: unsafe extern "system" fn(
        this: *mut IDeckLinkInput,
        displayMode: BMDDisplayMode,
        pixelFormat: BMDPixelFormat,
        flags: BMDVideoInputFlags,
        result: *mut BMDDisplayModeSupport_v10_11,
        resultDisplayMode: *mut *mut IDeckLinkDisplayMode,
    ) -> HRESULT,
    pub GetDisplayModeIterator: unsafe extern "system" fn(
        this: *mut IDeckLinkInput,
        iterator: *mut *mut IDeckLinkDisplayModeIterator,
    ) -> HRESULT,
    pub SetScreenPreviewCallback:
        unsafe extern "system" fn(this: *mut IDeckLinkInput, previewCallback: *mut c_void) -> HRESULT,
    pub EnableVideoInput: unsafe extern "system" fn(
        this: *mut IDeckLinkInput,
        displayMode: BMDDisplayMode,
        pixelFormat: BMDPixelFormat,
        flags: BMDVideoInputFlags,
    ) -> HRESULT,
    pub DisableVideoInput: unsafe extern "system" fn(this: *mut IDeckLinkInput) -> HRESULT,
    pub GetAvailableVideoFrameCount: unsafe extern "system" fn(
        this: *mut IDeckLinkInput,
        availableFrameCount: *mut u32,
    ) -> HRESULT,
    pub SetVideoInputFrameMemoryAllocator:
        unsafe extern "system" fn(this: *mut IDeckLinkInput, theAllocator: *mut c_void) -> HRESULT,
    pub EnableAudioInput: unsafe extern "system" fn(
        this: *mut IDeckLinkInput,
        sampleRate: BMDAudioSampleRate,
        sampleType: BMDAudioSampleType,
        channelCount: u32,
    ) -> HRESULT,
    pub DisableAudioInput: unsafe extern "system" fn(this: *mut IDeckLinkInput) -> HRESULT,
    pub GetAvailableAudioSampleFrameCount: unsafe extern "system" fn(
        this: *mut IDeckLinkInput,
        availableSampleFrameCount: *mut u32,
    ) -> HRESULT,
    pub StartStreams: unsafe extern "system" fn(this: *mut IDeckLinkInput) -> HRESULT,
    pub StopStreams: unsafe extern "system" fn(this: *mut IDeckLinkInput) -> HRESULT,
    pub PauseStreams: unsafe extern "system" fn(this: *mut IDeckLinkInput) -> HRESULT,
    pub FlushStreams: unsafe extern "system" fn(this: *mut IDeckLinkInput) -> HRESULT,
    pub SetCallback: unsafe extern "system" fn(
        this: *mut IDeckLinkInput,
        theCallback: *mut IDeckLinkInputCallback,
    ) -> HRESULT,
    pub GetHardwareReferenceClock: unsafe extern "system" fn(
        this: *mut IDeckLinkInput,
        desiredTimeScale: BMDTimeScale,
        hardwareTime: *mut BMDTimeValue,
        timeInFrame: *mut BMDTimeValue,
        ticksPerFrame: *mut BMDTimeValue,
    ) -> HRESULT,
}

com_interface!(
    /// `IDeckLinkOutput_v10_11`.
    IDeckLinkOutput => IDeckLinkOutputVtbl, IID_IDeckLinkOutput
);

#[repr(C)]
pub struct IDeckLinkOutputVtbl {
    pub base: IUnknownVtbl,
    pub DoesSupportVideoMode: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        displayMode: BMDDisplayMode,
        pixelFormat: BMDPixelFormat,
        flags: BMDVideoOutputFlags,
        result: *mut BMDDisplayModeSupport_v10_11,
        resultDisplayMode: *mut *mut IDeckLinkDisplayMode,
    ) -> HRESULT,
    pub GetDisplayModeIterator: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        iterator: *mut *mut IDeckLinkDisplayModeIterator,
    ) -> HRESULT,
    pub SetScreenPreviewCallback: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        previewCallback: *mut c_void,
    ) -> HRESULT,
    pub EnableVideoOutput: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        displayMode: BMDDisplayMode,
        flags: BMDVideoOutputFlags,
    ) -> HRESULT,
    pub DisableVideoOutput: unsafe extern "system" fn(this: *mut IDeckLinkOutput) -> HRESULT,
    pub SetVideoOutputFrameMemoryAllocator:
        unsafe extern "system" fn(this: *mut IDeckLinkOutput, theAllocator: *mut c_void) -> HRESULT,
    pub CreateVideoFrame: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        width: i32,
        height: i32,
        rowBytes: i32,
        pixelFormat: BMDPixelFormat,
        flags: BMDFrameFlags,
        outFrame: *mut *mut IDeckLinkMutableVideoFrame,
    ) -> HRESULT,
    pub CreateAncillaryData: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        pixelFormat: BMDPixelFormat,
        outBuffer: *mut LPVOID,
    ) -> HRESULT,
    pub DisplayVideoFrameSync: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        theFrame: *mut IDeckLinkVideoFrame,
    ) -> HRESULT,
    pub ScheduleVideoFrame: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        theFrame: *mut IDeckLinkVideoFrame,
        displayTime: BMDTimeValue,
        displayDuration: BMDTimeValue,
        timeScale: BMDTimeScale,
    ) -> HRESULT,
    pub SetScheduledFrameCompletionCallback: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        theCallback: *mut IDeckLinkVideoOutputCallback,
    ) -> HRESULT,
    pub GetBufferedVideoFrameCount: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        bufferedFrameCount: *mut u32,
    ) -> HRESULT,
    pub EnableAudioOutput: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        sampleRate: BMDAudioSampleRate,
        sampleType: BMDAudioSampleType,
        channelCount: u32,
        streamType: BMDAudioOutputStreamType,
    ) -> HRESULT,
    pub DisableAudioOutput: unsafe extern "system" fn(this: *mut IDeckLinkOutput) -> HRESULT,
    pub WriteAudioSamplesSync: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        buffer: *mut c_void,
        sampleFrameCount: u32,
        sampleFramesWritten: *mut u32,
    ) -> HRESULT,
    pub BeginAudioPreroll: unsafe extern "system" fn(this: *mut IDeckLinkOutput) -> HRESULT,
    pub EndAudioPreroll: unsafe extern "system" fn(this: *mut IDeckLinkOutput) -> HRESULT,
    pub ScheduleAudioSamples: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        buffer: *mut c_void,
        sampleFrameCount: u32,
        streamTime: BMDTimeValue,
        timeScale: BMDTimeScale,
        sampleFramesWritten: *mut u32,
    ) -> HRESULT,
    pub GetBufferedAudioSampleFrameCount: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        bufferedSampleFrameCount: *mut u32,
    ) -> HRESULT,
    pub FlushBufferedAudioSamples: unsafe extern "system" fn(this: *mut IDeckLinkOutput) -> HRESULT,
    pub SetAudioCallback:
        unsafe extern "system" fn(this: *mut IDeckLinkOutput, theCallback: *mut c_void) -> HRESULT,
    pub StartScheduledPlayback: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        playbackStartTime: BMDTimeValue,
        timeScale: BMDTimeScale,
        playbackSpeed: f64,
    ) -> HRESULT,
    pub StopScheduledPlayback: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        stopPlaybackAtTime: BMDTimeValue,
        actualStopTime: *mut BMDTimeValue,
        timeScale: BMDTimeScale,
    ) -> HRESULT,
    pub IsScheduledPlaybackRunning:
        unsafe extern "system" fn(this: *mut IDeckLinkOutput, active: *mut bool) -> HRESULT,
    pub GetScheduledStreamTime: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        desiredTimeScale: BMDTimeScale,
        streamTime: *mut BMDTimeValue,
        playbackSpeed: *mut f64,
    ) -> HRESULT,
    pub GetReferenceStatus: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        referenceStatus: *mut BMDReferenceStatus,
    ) -> HRESULT,
    pub GetHardwareReferenceClock: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        desiredTimeScale: BMDTimeScale,
        hardwareTime: *mut BMDTimeValue,
        timeInFrame: *mut BMDTimeValue,
        ticksPerFrame: *mut BMDTimeValue,
    ) -> HRESULT,
    pub GetFrameCompletionReferenceTimestamp: unsafe extern "system" fn(
        this: *mut IDeckLinkOutput,
        theFrame: *mut IDeckLinkVideoFrame,
        desiredTimeScale: BMDTimeScale,
        frameCompletionTimestamp: *mut BMDTimeValue,
    ) -> HRESULT,
}

com_interface!(
    /// Input notification sink (`IDeckLinkInputCallback_v11_5_1`).
    IDeckLinkInputCallback => IDeckLinkInputCallbackVtbl, IID_IDeckLinkInputCallback
);

#[repr(C)]
pub struct IDeckLinkInputCallbackVtbl {
    pub base: IUnknownVtbl,
    pub VideoInputFormatChanged: unsafe extern "system" fn(
        this: *mut IDeckLinkInputCallback,
        notificationEvents: BMDVideoInputFormatChangedEvents,
        newDisplayMode: *mut IDeckLinkDisplayMode,
        detectedSignalFlags: BMDDetectedVideoInputFormatFlags,
    ) -> HRESULT,
    pub VideoInputFrameArrived: unsafe extern "system" fn(
        this: *mut IDeckLinkInputCallback,
        videoFrame: *mut IDeckLinkVideoInputFrame,
        audioPacket: *mut IDeckLinkAudioInputPacket,
    ) -> HRESULT,
    pub Destructors: [Destructor; 2],
}

com_interface!(
    /// Scheduled playback notification sink.
    IDeckLinkVideoOutputCallback => IDeckLinkVideoOutputCallbackVtbl, IID_IDeckLinkVideoOutputCallback
);

#[repr(C)]
pub struct IDeckLinkVideoOutputCallbackVtbl {
    pub base: IUnknownVtbl,
    pub ScheduledFrameCompleted: unsafe extern "system" fn(
        this: *mut IDeckLinkVideoOutputCallback,
        completedFrame: *mut IDeckLinkVideoFrame,
        result: BMDOutputFrameCompletionResult,
    ) -> HRESULT,
    pub ScheduledPlaybackHasStopped:
        unsafe extern "system" fn(this: *mut IDeckLinkVideoOutputCallback) -> HRESULT,
    pub Destructors: [Destructor; 2],
}
