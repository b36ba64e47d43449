use serde::{Deserialize, Serialize};

use crate::classifier::PayloadClassifier;
use crate::error::SessionError;
use crate::models::{Locale, ScanResult};

/// A classified scan together with when it happened
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanEvent {
    pub result: ScanResult,
    pub scanned_at: String,
}

impl ScanEvent {
    pub fn new(result: ScanResult) -> Self {
        Self {
            result,
            scanned_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Scanner closed
    #[default]
    Idle,
    /// Camera open, waiting for a code
    Scanning,
    /// A result is on screen; further codes are ignored until rescan/close
    ResultShown(ScanEvent),
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Scanning => "scanning",
            SessionState::ResultShown(_) => "result_shown",
        }
    }
}

/// Single-owner scan session
#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    classifier: PayloadClassifier,
    state: SessionState,
}

impl ScanSession {
    pub fn new(locale: Locale) -> Self {
        Self {
            classifier: PayloadClassifier::new(locale),
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn locale(&self) -> Locale {
        self.classifier.locale()
    }

    /// The result currently on screen
    pub fn current(&self) -> Option<&ScanEvent> {
        match &self.state {
            SessionState::ResultShown(event) => Some(event),
            _ => None,
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.state, SessionState::ResultShown(_))
    }

    /// Opens the scanner, discarding any result on screen
    pub fn open(&mut self) {
        self.transition(SessionState::Scanning);
    }

    /// Handles one scan event from the camera
    ///
    /// # Errors
    /// * `NotScanning` - scanner is closed
    /// * `Locked` - a result is already shown
    pub fn on_scanned(&mut self, raw: Option<&str>) -> Result<ScanEvent, SessionError> {
        match self.state {
            SessionState::Scanning => {}
            SessionState::Idle => return Err(SessionError::NotScanning),
            SessionState::ResultShown(_) => {
                log::trace!("scan ignored: session locked");
                return Err(SessionError::Locked);
            }
        }

        let event = ScanEvent::new(self.classifier.classify(raw));
        self.transition(SessionState::ResultShown(event.clone()));
        Ok(event)
    }

    /// Dismisses the shown result and resumes scanning
    pub fn rescan(&mut self) -> Result<(), SessionError> {
        if !self.is_locked() {
            return Err(SessionError::NotShowingResult);
        }
        self.transition(SessionState::Scanning);
        Ok(())
    }

    /// Closes the scanner from any state, discarding the result
    pub fn close(&mut self) {
        self.transition(SessionState::Idle);
    }

    fn transition(&mut self, next: SessionState) {
        log::debug!("scan session: {} -> {}", self.state.as_str(), next.as_str());
        self.state = next;
    }
}
