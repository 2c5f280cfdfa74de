use thiserror::Error;

pub const DEFAULT_AGENT_ID: &str = "agent_0701kgw80rpefhw824fqvyf3wrzv";

pub const STATUS_READY: &str = "PROTO_AI // READY";
pub const STATUS_CONNECTING: &str = "CONNECTING...";
pub const STATUS_ONLINE: &str = "PROTO_AI // ONLINE";

/// Parameters handed to the voice SDK when a session starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub agent_id: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            agent_id: DEFAULT_AGENT_ID.to_string(),
        }
    }
}

impl SessionConfig {
    /// Use `agent_id` when it is non-blank, else the default agent.
    pub fn with_agent_id(agent_id: Option<&str>) -> Self {
        match agent_id.map(str::trim) {
            Some(id) if !id.is_empty() => Self {
                agent_id: id.to_string(),
            },
            _ => Self::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("microphone access denied")]
    MicDenied,
    #[error("voice SDK not loaded")]
    SdkUnavailable,
    #[error("session failed: {0}")]
    Session(String),
}

impl SessionError {
    pub fn status_text(&self) -> &'static str {
        match self {
            SessionError::MicDenied => "MIC DENIED",
            SessionError::SdkUnavailable => "SDK ERROR",
            SessionError::Session(_) => "ERROR // RETRY",
        }
    }
}

/// External voice session handle. Only the surface the page needs.
pub trait VoiceSession {
    fn end_session(&self);
    fn set_mic_muted(&self, muted: bool);
    /// Agent (remote) audio magnitudes, 0..=255 per bin.
    fn output_frequency_data(&self) -> Option<Vec<u8>>;
    /// Local microphone magnitudes, 0..=255 per bin.
    fn input_frequency_data(&self) -> Option<Vec<u8>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Connecting,
    Live,
    Ended,
    Errored,
}

impl Phase {
    /// Whether a new session may be started from here.
    #[inline]
    pub fn is_idle(self) -> bool {
        matches!(self, Phase::Idle | Phase::Ended | Phase::Errored)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Listening,
    Speaking,
    Thinking,
}

impl Mode {
    pub fn parse(s: &str) -> Option<Mode> {
        match s {
            "listening" => Some(Mode::Listening),
            "speaking" => Some(Mode::Speaking),
            "thinking" => Some(Mode::Thinking),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Listening => "[ LISTENING ]",
            Mode::Speaking => "[ SPEAKING ]",
            Mode::Thinking => "[ THINKING... ]",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    Agent,
    User,
}

impl Speaker {
    pub fn from_source(source: &str) -> Option<Speaker> {
        match source {
            "ai" => Some(Speaker::Agent),
            "user" => Some(Speaker::User),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Speaker::Agent => "PROTO_AI",
            Speaker::User => "YOU",
        }
    }

    /// CSS modifier used by the transcript line.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Speaker::Agent => "agent",
            Speaker::User => "user",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptLine {
    pub speaker: Speaker,
    pub text: String,
}

/// Callbacks delivered by the voice SDK.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Connect,
    Disconnect,
    ModeChange(Option<Mode>),
    Message { source: String, text: String },
    StatusChange(String),
    Error(String),
}

/// What the DOM controls should look like for the current adapter state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub call_enabled: bool,
    pub call_label: &'static str,
    pub end_enabled: bool,
    pub mute_enabled: bool,
    pub muted: bool,
    pub mute_label: &'static str,
    pub widget_active: bool,
}

/// Owns the single active session handle and the UI state derived from its
/// lifecycle. Every failure path converges on [`SessionAdapter::teardown`].
pub struct SessionAdapter<S: VoiceSession> {
    phase: Phase,
    session: Option<S>,
    muted: bool,
    status: &'static str,
    mode: Option<Mode>,
    transcript: Vec<TranscriptLine>,
}

impl<S: VoiceSession> Default for SessionAdapter<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: VoiceSession> SessionAdapter<S> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            session: None,
            muted: false,
            status: STATUS_READY,
            mode: None,
            transcript: Vec::new(),
        }
    }

    /// Enter `Connecting`. Returns false (and changes nothing) when a session
    /// is already connecting or live.
    pub fn begin_start(&mut self) -> bool {
        if !self.phase.is_idle() {
            log::debug!("[voice] start ignored in {:?}", self.phase);
            return false;
        }
        self.phase = Phase::Connecting;
        self.status = STATUS_CONNECTING;
        true
    }

    /// Store the handle returned by the SDK once `startSession` resolves.
    pub fn attach(&mut self, session: S) {
        if self.phase.is_idle() {
            // torn down while the SDK was still negotiating
            session.end_session();
            return;
        }
        // one handle at a time; a displaced one must still be closed
        if let Some(previous) = self.session.replace(session) {
            log::warn!("[voice] replacing an attached session");
            previous.end_session();
        }
    }

    /// A start attempt failed before the session came up.
    pub fn fail(&mut self, err: &SessionError) {
        log::error!("[voice] {}", err);
        self.teardown(Phase::Errored, err.status_text());
    }

    pub fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Connect => {
                if self.phase != Phase::Connecting {
                    log::debug!("[voice] connect ignored in {:?}", self.phase);
                    return;
                }
                self.phase = Phase::Live;
                self.status = STATUS_ONLINE;
                log::info!("[voice] connected");
            }
            SessionEvent::Disconnect => self.disconnected(),
            SessionEvent::ModeChange(mode) => {
                if self.phase == Phase::Live {
                    self.mode = mode;
                }
            }
            SessionEvent::Message { source, text } => self.push_message(&source, &text),
            SessionEvent::StatusChange(status) => match status.as_str() {
                "connecting" => self.status = STATUS_CONNECTING,
                "connected" => self.status = STATUS_ONLINE,
                "disconnected" => self.disconnected(),
                _ => {}
            },
            SessionEvent::Error(msg) => {
                let err = SessionError::Session(msg);
                log::error!("[voice] {}", err);
                self.teardown(Phase::Errored, err.status_text());
            }
        }
    }

    /// User-initiated hang up. No-op when nothing is connecting or live.
    pub fn end(&mut self) -> bool {
        if self.phase.is_idle() && self.session.is_none() {
            return false;
        }
        if let Some(session) = self.session.take() {
            session.end_session();
        }
        self.teardown(Phase::Ended, STATUS_READY);
        true
    }

    pub fn toggle_mute(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        self.muted = !self.muted;
        session.set_mic_muted(self.muted);
    }

    /// Current (outbound, inbound) magnitudes, if a session exists.
    pub fn spectrum_frame(&self) -> (Option<Vec<u8>>, Option<Vec<u8>>) {
        match &self.session {
            Some(s) => (s.output_frequency_data(), s.input_frequency_data()),
            None => (None, None),
        }
    }

    pub fn controls(&self) -> Controls {
        let live = self.phase == Phase::Live;
        Controls {
            call_enabled: self.phase.is_idle(),
            call_label: match self.phase {
                Phase::Connecting => "...",
                Phase::Live => "LIVE",
                _ => "START",
            },
            end_enabled: live,
            mute_enabled: live && self.session.is_some(),
            muted: self.muted,
            mute_label: if self.muted { "MUTED" } else { "MIC" },
            widget_active: live,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_connected(&self) -> bool {
        self.phase == Phase::Live
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn status(&self) -> &'static str {
        self.status
    }

    pub fn mode_label(&self) -> &'static str {
        self.mode.map(Mode::label).unwrap_or("")
    }

    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    fn disconnected(&mut self) {
        // keep an error status visible if the SDK reports the close afterwards
        if self.phase == Phase::Errored {
            self.teardown(Phase::Errored, self.status);
        } else {
            self.teardown(Phase::Ended, STATUS_READY);
        }
    }

    fn push_message(&mut self, source: &str, text: &str) {
        let Some(speaker) = Speaker::from_source(source) else {
            return;
        };
        if text.is_empty() {
            return;
        }
        self.transcript.push(TranscriptLine {
            speaker,
            text: text.to_string(),
        });
    }

    /// Single reset routine: idle controls, no mode, unmuted, handle dropped.
    fn teardown(&mut self, phase: Phase, status: &'static str) {
        self.phase = phase;
        self.status = status;
        self.mode = None;
        self.muted = false;
        self.session = None;
    }
}
