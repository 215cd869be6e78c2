//! Announcement sinks.
//!
//! The screen reader queue is drained once per frame into a sink. The log
//! sink always works; the speech sink voices announcements through the
//! platform TTS engine when the `speech` feature is enabled.

use serde::{Deserialize, Serialize};

use super::{Announcement, SpeechError};

/// Which sink receives drained announcements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncerKind {
    /// Rely on the AccessKit live region; drained announcements are logged
    #[default]
    LiveRegion,
    /// Speak announcements with the platform TTS engine; with a screen reader
    /// also running, each change is heard twice (live region and TTS)
    Speech,
}

impl std::fmt::Display for AnnouncerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnouncerKind::LiveRegion => write!(f, "live region"),
            AnnouncerKind::Speech => write!(f, "speech"),
        }
    }
}

/// Destination for announcements.
pub trait AnnouncementSink {
    /// Deliver one announcement.
    fn deliver(&mut self, announcement: &Announcement) -> Result<(), SpeechError>;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// Sink that records announcements through `tracing`.
#[derive(Debug, Default)]
pub struct LogSink {
    delivered: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of announcements delivered so far.
    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

impl AnnouncementSink for LogSink {
    fn deliver(&mut self, announcement: &Announcement) -> Result<(), SpeechError> {
        self.delivered += 1;
        tracing::info!("Announce: {}", announcement.text);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

/// Sink that speaks announcements using the `tts` crate.
#[cfg(feature = "speech")]
pub struct SpeechSink {
    tts: tts::Tts,
}

#[cfg(feature = "speech")]
impl SpeechSink {
    /// Initialize the platform TTS engine.
    ///
    /// `rate` multiplies the engine's normal rate (clamped to 0.5 - 2.0);
    /// `volume` is a fraction of the engine's maximum (clamped to 0.0 - 1.0).
    pub fn new(rate: f32, volume: f32) -> Result<Self, SpeechError> {
        tracing::info!("Initializing TTS engine");

        let mut tts = tts::Tts::default().map_err(|e| SpeechError::InitFailed(e.to_string()))?;
        let features = tts.supported_features();

        if features.rate {
            let target = (tts.normal_rate() * rate.clamp(0.5, 2.0))
                .clamp(tts.min_rate(), tts.max_rate());
            if let Err(e) = tts.set_rate(target) {
                tracing::warn!("Failed to set speech rate: {}", e);
            }
        }

        if features.volume {
            let target = tts.min_volume()
                + (tts.max_volume() - tts.min_volume()) * volume.clamp(0.0, 1.0);
            if let Err(e) = tts.set_volume(target) {
                tracing::warn!("Failed to set speech volume: {}", e);
            }
        }

        Ok(Self { tts })
    }
}

#[cfg(feature = "speech")]
impl AnnouncementSink for SpeechSink {
    /// Queues behind speech in progress rather than interrupting it.
    fn deliver(&mut self, announcement: &Announcement) -> Result<(), SpeechError> {
        tracing::debug!("TTS speaking: {}", announcement.text);
        self.tts
            .speak(announcement.text.as_str(), false)
            .map_err(|e| SpeechError::SpeakFailed(e.to_string()))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "speech"
    }
}

#[cfg(feature = "speech")]
fn speech_sink(rate: f32, volume: f32) -> Result<Box<dyn AnnouncementSink>, SpeechError> {
    Ok(Box::new(SpeechSink::new(rate, volume)?))
}

#[cfg(not(feature = "speech"))]
fn speech_sink(_rate: f32, _volume: f32) -> Result<Box<dyn AnnouncementSink>, SpeechError> {
    Err(SpeechError::Unsupported)
}

/// Build the sink for `kind`, falling back to [`LogSink`] when speech is
/// unavailable.
pub fn build_sink(kind: AnnouncerKind, rate: f32, volume: f32) -> Box<dyn AnnouncementSink> {
    match kind {
        AnnouncerKind::LiveRegion => Box::new(LogSink::new()),
        AnnouncerKind::Speech => match speech_sink(rate, volume) {
            Ok(sink) => sink,
            Err(e) => {
                tracing::warn!("Speech announcer unavailable, using log sink: {}", e);
                Box::new(LogSink::new())
            }
        },
    }
}
