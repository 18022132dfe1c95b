use std::time::Duration;

use crate::domain::{
    common::entities::app_errors::CoreError, media::FALLBACK_MIME_TYPE,
    submission::limits::VideoClip,
};

/// A camera (or any other recording source) that must be explicitly opened and closed.
#[cfg_attr(test, mockall::automock)]
pub trait CaptureDevice: Send {
    fn open(&mut self) -> Result<(), CoreError>;

    fn close(&mut self);
}

/// Owns a capture device for the length of one recording.
///
/// The device is opened by [`CaptureSession::start`] and closed exactly once,
/// either by [`CaptureSession::finish`] or when the session is dropped on an
/// early return or error.
#[derive(Debug)]
pub struct CaptureSession<D: CaptureDevice> {
    device: D,
    open: bool,
    buffer: Vec<u8>,
    elapsed: Duration,
}

impl<D: CaptureDevice> CaptureSession<D> {
    pub fn start(mut device: D) -> Result<Self, CoreError> {
        device.open()?;
        tracing::debug!("Capture session started");

        Ok(Self {
            device,
            open: true,
            buffer: Vec::new(),
            elapsed: Duration::ZERO,
        })
    }

    /// Append a recorded chunk. `elapsed` is the recording time reached after this chunk.
    pub fn record(&mut self, chunk: &[u8], elapsed: Duration) {
        self.buffer.extend_from_slice(chunk);
        self.elapsed = self.elapsed.max(elapsed);
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Stop recording, release the device and hand back the clip.
    pub fn finish(mut self, mime_type: &str) -> VideoClip {
        self.release();

        let mime_type = if mime_type.trim().is_empty() {
            FALLBACK_MIME_TYPE.to_string()
        } else {
            mime_type.to_string()
        };

        VideoClip {
            bytes: std::mem::take(&mut self.buffer),
            mime_type,
            file_name: Some("live-session-recording".to_string()),
            duration: self.elapsed,
        }
    }

    fn release(&mut self) {
        if self.open {
            self.device.close();
            self.open = false;
            tracing::debug!("Capture session released");
        }
    }
}

impl<D: CaptureDevice> Drop for CaptureSession<D> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device_expecting_one_close() -> MockCaptureDevice {
        let mut device = MockCaptureDevice::new();
        device.expect_open().times(1).returning(|| Ok(()));
        device.expect_close().times(1).return_const(());
        device
    }

    #[test]
    fn finish_closes_the_device_and_returns_the_clip() {
        let mut session = CaptureSession::start(device_expecting_one_close()).unwrap();
        session.record(b"abc", Duration::from_secs(4));
        session.record(b"def", Duration::from_secs(9));

        let clip = session.finish("video/webm");

        assert_eq!(clip.bytes, b"abcdef");
        assert_eq!(clip.mime_type, "video/webm");
        assert_eq!(clip.duration, Duration::from_secs(9));
    }

    #[test]
    fn dropping_an_unfinished_session_closes_the_device() {
        let mut session = CaptureSession::start(device_expecting_one_close()).unwrap();
        session.record(b"partial", Duration::from_secs(1));
        drop(session);
    }

    #[test]
    fn failed_open_never_closes() {
        let mut device = MockCaptureDevice::new();
        device
            .expect_open()
            .times(1)
            .returning(|| Err(CoreError::CaptureUnavailable("permission denied".into())));
        device.expect_close().never();

        let result = CaptureSession::start(device);
        assert!(matches!(result, Err(CoreError::CaptureUnavailable(_))));
    }

    #[test]
    fn blank_recording_type_falls_back() {
        let session = CaptureSession::start(device_expecting_one_close()).unwrap();
        assert_eq!(session.finish("").mime_type, FALLBACK_MIME_TYPE);
    }
}
