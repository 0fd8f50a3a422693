//! Background music playback.
//!
//! One looping track, owned by the root application state. The toggle
//! entry points there drive [`PlaybackState`]; this module only owns the
//! audio device handle. A missing device or unreadable file degrades to
//! "music unavailable" with a logged warning, never an error the user sees.

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use tracing::warn;

use crate::site::MusicConfig;

/// The two playback states of the music toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing audible
    #[default]
    Stopped,
    /// Track is playing (looped)
    Playing,
}

impl PlaybackState {
    /// The state the toggle transitions to.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Stopped => Self::Playing,
            Self::Playing => Self::Stopped,
        }
    }
}

/// Holds the audio device and the looping track sink.
///
/// The output stream must outlive the sink, so both live here together.
pub struct MusicPlayer {
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    sink: Sink,
    title: Option<String>,
}

impl MusicPlayer {
    /// Acquires the default audio device and queues the configured track,
    /// paused.
    ///
    /// Errors cover the cases the caller degrades around: no output
    /// device, missing file, undecodable audio.
    pub fn new(music: &MusicConfig, volume: f32) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("No audio output device available")?;

        let sink = Sink::try_new(&handle).context("Failed to create audio sink")?;
        sink.pause();
        sink.set_volume(volume.clamp(0.0, 2.0));

        let file = File::open(&music.file)
            .with_context(|| format!("Failed to open audio file: {}", music.file.display()))?;
        let decoder = Decoder::new(BufReader::new(file))
            .with_context(|| format!("Failed to decode audio file: {}", music.file.display()))?;

        // The original page loops its background track.
        sink.append(decoder.repeat_infinite());

        Ok(Self {
            _stream: stream,
            _handle: handle,
            sink,
            title: music.title.clone(),
        })
    }

    /// Tries to construct a player, logging and returning `None` when the
    /// environment refuses (the music toggle then reports unavailable).
    #[must_use]
    pub fn try_new(music: &MusicConfig, volume: f32) -> Option<Self> {
        match Self::new(music, volume) {
            Ok(player) => Some(player),
            Err(e) => {
                warn!("music unavailable: {e:#}");
                None
            }
        }
    }

    /// Starts or resumes playback.
    pub fn resume(&self) {
        self.sink.play();
    }

    /// Pauses playback, keeping the position.
    pub fn pause(&self) {
        self.sink.pause();
    }

    /// Track title from the document, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
