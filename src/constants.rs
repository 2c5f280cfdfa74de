// DOM hooks and timings for the web front-end.

// Background
pub const BG_CANVAS_ID: &str = "bg-canvas";
pub const TIMECODE_ID: &str = "timecode";

// Voice widget
pub const VOICE_WIDGET_ID: &str = "voice-agent";
pub const VOICE_TOGGLE_ID: &str = "voice-toggle";
pub const VOICE_PANEL_ID: &str = "voice-panel";
pub const VOICE_PANEL_CLOSE_ID: &str = "voice-panel-close";
pub const VOICE_STATUS_TEXT_ID: &str = "voice-status-text";
pub const VOICE_MODE_ID: &str = "voice-mode";
pub const VOICE_CANVAS_ID: &str = "voice-canvas";
pub const VOICE_TRANSCRIPT_ID: &str = "voice-transcript";
pub const VOICE_MUTE_ID: &str = "voice-mute";
pub const VOICE_CALL_ID: &str = "voice-call";
pub const VOICE_CALL_ICON_ID: &str = "voice-call-icon";
pub const VOICE_END_ID: &str = "voice-end";
// Optional override of the agent id on the widget root
pub const AGENT_ID_ATTR: &str = "data-agent-id";

// Shared CSS state class for the widget, panel and transcript
pub const ACTIVE_CLASS: &str = "active";
pub const MUTED_CLASS: &str = "muted";

// ASCII viewer
pub const ASCII_PORTRAIT_ID: &str = "ascii-portrait";
pub const ASCII_COORDS_ID: &str = "ascii-coords";
pub const ASCII_VIEWPORT_SELECTOR: &str = ".ascii-viewport";
pub const ASCII_TERMINAL_SELECTOR: &str = ".ascii-terminal";

// Portrait glitch timer
pub const GLITCH_INTERVAL_MS: i32 = 2000;
pub const GLITCH_HOLD_MS: i32 = 100;
