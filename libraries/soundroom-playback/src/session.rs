//! Playback session - the process-wide transport
//!
//! Coordinates the active track, play/pause flag, progress, and volume

use soundroom_core::Track;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    types::{PlaybackConfig, PlaybackState},
    volume::Volume,
};

/// Progress bounds, in percent
const MIN_PROGRESS: f64 = 0.0;
const MAX_PROGRESS: f64 = 100.0;

/// Playback session
///
/// Invariant: with no active track, `playing` is false and `progress` is 0.
#[derive(Debug)]
pub struct PlaybackSession {
    // Active track, shared with whichever playlist or pool it came from
    current_track: Option<Arc<Track>>,

    playing: bool,

    // Percentage of the active track played so far
    progress: f64,

    volume: Volume,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackSession {
    /// Create an idle session
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            current_track: None,
            playing: false,
            progress: MIN_PROGRESS,
            volume: Volume::new(config.volume),
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Start playing `track` from the beginning
    ///
    /// Valid from every state. Selecting the track that is already active
    /// restarts it rather than toggling.
    pub fn select_track(&mut self, track: Arc<Track>) {
        let previous_track_id = self.current_track.as_ref().map(|t| t.id.to_string());
        let was_playing = self.playing;

        tracing::debug!(track = %track.id, title = %track.title, "Selecting track");

        self.pending_events.push(PlaybackEvent::TrackChanged {
            track_id: track.id.to_string(),
            previous_track_id,
        });

        self.current_track = Some(track);
        self.playing = true;
        self.progress = MIN_PROGRESS;

        if !was_playing {
            self.emit_state_changed(PlaybackState::Playing);
        }
    }

    /// Flip between playing and paused
    ///
    /// Rejected when idle; active track and progress are never touched.
    pub fn toggle_play_pause(&mut self) -> Result<PlaybackState> {
        if self.current_track.is_none() {
            tracing::debug!("Toggle ignored: no track loaded");
            return Err(PlaybackError::NoTrackLoaded);
        }

        self.playing = !self.playing;
        let state = self.get_state();
        self.emit_state_changed(state);
        Ok(state)
    }

    // ===== Seek =====

    /// Move progress to `percent` of the active track (clamped to 0-100)
    ///
    /// This is how a host's progress timer reports ticks as well as how a
    /// user drags the progress bar. NaN is treated as 0.
    pub fn seek_to_percent(&mut self, percent: f64) -> Result<f64> {
        if self.current_track.is_none() {
            return Err(PlaybackError::NoTrackLoaded);
        }

        let percent = if percent.is_nan() {
            MIN_PROGRESS
        } else {
            percent.clamp(MIN_PROGRESS, MAX_PROGRESS)
        };

        self.progress = percent;
        self.pending_events.push(PlaybackEvent::Seeked { progress: percent });
        Ok(percent)
    }

    // ===== Volume =====

    /// Set volume, clamping into 0-100
    ///
    /// Valid in every state and never affects play/pause. Returns the level
    /// actually applied.
    pub fn set_volume(&mut self, level: i32) -> u8 {
        let applied = self.volume.set_level(level);
        self.pending_events
            .push(PlaybackEvent::VolumeChanged { level: applied });
        applied
    }

    /// Get current volume level (0-100)
    pub fn get_volume(&self) -> u8 {
        self.volume.level()
    }

    // ===== State Queries =====

    /// Get current playback state
    pub fn get_state(&self) -> PlaybackState {
        match (&self.current_track, self.playing) {
            (None, _) => PlaybackState::Idle,
            (Some(_), false) => PlaybackState::Paused,
            (Some(_), true) => PlaybackState::Playing,
        }
    }

    /// Get currently active track
    pub fn get_current_track(&self) -> Option<&Arc<Track>> {
        self.current_track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Progress through the active track, in percent (0 when idle)
    pub fn get_progress(&self) -> f64 {
        self.progress
    }

    /// Time elapsed in the active track, derived from progress and duration
    ///
    /// Uploaded tracks have an unknown (zero) duration, so they always report
    /// zero elapsed time.
    pub fn get_elapsed(&self) -> Duration {
        match &self.current_track {
            Some(track) => track.duration().mul_f64(self.progress / MAX_PROGRESS),
            None => Duration::ZERO,
        }
    }

    // ===== Events =====

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn emit_state_changed(&mut self, state: PlaybackState) {
        self.pending_events
            .push(PlaybackEvent::StateChanged { state });
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(title: &str, duration_secs: u32) -> Arc<Track> {
        Arc::new(Track::new(title, "Artist", duration_secs))
    }

    #[test]
    fn starts_idle_with_configured_volume() {
        let session = PlaybackSession::new(PlaybackConfig { volume: 40 });
        assert_eq!(session.get_state(), PlaybackState::Idle);
        assert!(session.get_current_track().is_none());
        assert!(!session.is_playing());
        assert_eq!(session.get_progress(), 0.0);
        assert_eq!(session.get_volume(), 40);
    }

    #[test]
    fn select_track_resets_progress_and_plays() {
        let mut session = PlaybackSession::default();
        let first = track("first", 200);
        session.select_track(Arc::clone(&first));
        session.seek_to_percent(50.0).unwrap();
        session.toggle_play_pause().unwrap();
        assert_eq!(session.get_state(), PlaybackState::Paused);

        let second = track("second", 100);
        session.select_track(Arc::clone(&second));

        assert_eq!(session.get_state(), PlaybackState::Playing);
        assert_eq!(session.get_progress(), 0.0);
        assert!(Arc::ptr_eq(session.get_current_track().unwrap(), &second));
    }

    #[test]
    fn reselecting_active_track_restarts_it() {
        let mut session = PlaybackSession::default();
        let t = track("loop", 100);
        session.select_track(Arc::clone(&t));
        session.seek_to_percent(80.0).unwrap();

        session.select_track(Arc::clone(&t));

        assert_eq!(session.get_state(), PlaybackState::Playing);
        assert_eq!(session.get_progress(), 0.0);
    }

    #[test]
    fn toggle_when_idle_is_rejected_without_change() {
        let mut session = PlaybackSession::default();
        assert_eq!(session.toggle_play_pause(), Err(PlaybackError::NoTrackLoaded));
        assert_eq!(session.get_state(), PlaybackState::Idle);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn toggle_flips_only_playing_flag() {
        let mut session = PlaybackSession::default();
        let t = track("t", 100);
        session.select_track(Arc::clone(&t));
        session.seek_to_percent(30.0).unwrap();

        assert_eq!(session.toggle_play_pause(), Ok(PlaybackState::Paused));
        assert_eq!(session.get_progress(), 30.0);
        assert!(Arc::ptr_eq(session.get_current_track().unwrap(), &t));

        assert_eq!(session.toggle_play_pause(), Ok(PlaybackState::Playing));
        assert_eq!(session.get_progress(), 30.0);
    }

    #[test]
    fn volume_does_not_touch_transport() {
        let mut session = PlaybackSession::default();
        assert_eq!(session.set_volume(-5), 0);
        assert_eq!(session.get_state(), PlaybackState::Idle);

        session.select_track(track("t", 10));
        session.toggle_play_pause().unwrap();
        assert_eq!(session.set_volume(101), 100);
        assert_eq!(session.get_state(), PlaybackState::Paused);
    }

    #[test]
    fn seek_clamps_and_requires_a_track() {
        let mut session = PlaybackSession::default();
        assert_eq!(session.seek_to_percent(10.0), Err(PlaybackError::NoTrackLoaded));

        session.select_track(track("t", 100));
        assert_eq!(session.seek_to_percent(150.0), Ok(100.0));
        assert_eq!(session.seek_to_percent(-3.0), Ok(0.0));
        assert_eq!(session.seek_to_percent(f64::NAN), Ok(0.0));
    }

    #[test]
    fn elapsed_follows_progress() {
        let mut session = PlaybackSession::default();
        assert_eq!(session.get_elapsed(), Duration::ZERO);

        session.select_track(track("t", 240));
        session.seek_to_percent(25.0).unwrap();
        assert_eq!(session.get_elapsed().as_secs(), 60);

        // Unknown duration
        session.select_track(track("upload", 0));
        session.seek_to_percent(90.0).unwrap();
        assert_eq!(session.get_elapsed(), Duration::ZERO);
    }

    #[test]
    fn events_describe_accepted_transitions() {
        let mut session = PlaybackSession::default();
        let a = track("a", 10);
        let b = track("b", 10);

        session.select_track(Arc::clone(&a));
        session.select_track(Arc::clone(&b));
        session.toggle_play_pause().unwrap();
        session.set_volume(30);

        let events = session.drain_events();
        assert_eq!(
            events,
            vec![
                PlaybackEvent::TrackChanged {
                    track_id: a.id.to_string(),
                    previous_track_id: None,
                },
                PlaybackEvent::StateChanged {
                    state: PlaybackState::Playing,
                },
                PlaybackEvent::TrackChanged {
                    track_id: b.id.to_string(),
                    previous_track_id: Some(a.id.to_string()),
                },
                PlaybackEvent::StateChanged {
                    state: PlaybackState::Paused,
                },
                PlaybackEvent::VolumeChanged { level: 30 },
            ]
        );
        assert!(session.drain_events().is_empty());
    }
}
