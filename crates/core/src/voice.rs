use serde::{Deserialize, Serialize};

const ADD_PREFIX: &str = "add ";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum VoiceCommand {
    AddCard(String),
    Unrecognized,
}

/// Parses a recognized transcript. The grammar is a single prefix command;
/// anything else is passed through as unrecognized and must stay inert.
pub fn interpret(transcript: &str) -> VoiceCommand {
    let lowered = transcript.to_lowercase();
    match lowered.strip_prefix(ADD_PREFIX) {
        Some(rest) => VoiceCommand::AddCard(rest.trim().to_string()),
        None => VoiceCommand::Unrecognized,
    }
}

/// Terminal outcome of one listening attempt, as reported by the platform
/// recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechResult {
    Transcript(String),
    Error(String),
}

/// The platform speech recognizer, injected by the surface. `poll` yields
/// a terminal result once one is available.
pub trait SpeechCapability {
    fn start(&mut self);
    fn stop(&mut self);
    fn poll(&mut self) -> Option<SpeechResult>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Listening,
}

/// Tracks whether a listening attempt is in flight. At most one may listen
/// at a time; results delivered while idle are dropped, which covers
/// recognizers that report a trailing transcript after an advisory stop.
#[derive(Debug, Default)]
pub struct SpeechSession {
    state: SessionState,
}

impl SpeechSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_listening(&self) -> bool {
        self.state == SessionState::Listening
    }

    /// Returns false without side effects when already listening.
    pub fn start(&mut self) -> bool {
        if self.state == SessionState::Listening {
            return false;
        }
        self.state = SessionState::Listening;
        true
    }

    pub fn stop(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Accepts a final transcript for the active attempt. Idle sessions
    /// ignore it and report nothing.
    pub fn on_transcript(&mut self, transcript: &str) -> Option<VoiceCommand> {
        if self.state != SessionState::Listening {
            return None;
        }
        self.state = SessionState::Idle;
        Some(interpret(transcript))
    }

    pub fn on_error(&mut self) {
        self.state = SessionState::Idle;
    }
}
