//! Streaming mode: how model responses are delivered during a run.
//!
//! [`StreamingMode`] is what the caller declares; [`EffectiveTransport`] is
//! what a Runner actually has to use once compositional function calling is
//! taken into account (see [`RunConfig::effective_transport`](super::RunConfig::effective_transport)).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Delivery mode for model responses.
///
/// Wire names are `NONE`, `SERVER_SENT_EVENTS` and `BIDIRECTIONAL`. Parsing is
/// case-insensitive and also accepts the short forms `sse` and `bidi`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StreamingMode {
    /// One complete response unit per model turn.
    #[default]
    None,
    /// A sequence of partial-response events, server to client only.
    Sse,
    /// Concurrent inbound and outbound event streams.
    Bidi,
}

impl StreamingMode {
    pub const ALL: [StreamingMode; 3] = [
        StreamingMode::None,
        StreamingMode::Sse,
        StreamingMode::Bidi,
    ];

    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamingMode::None => "NONE",
            StreamingMode::Sse => "SERVER_SENT_EVENTS",
            StreamingMode::Bidi => "BIDIRECTIONAL",
        }
    }

    pub fn is_streaming(&self) -> bool {
        !matches!(self, StreamingMode::None)
    }
}

impl fmt::Display for StreamingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known streaming modes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown streaming mode '{0}' (expected NONE, SERVER_SENT_EVENTS or BIDIRECTIONAL)")]
pub struct ParseStreamingModeError(pub String);

impl FromStr for StreamingMode {
    type Err = ParseStreamingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" => Ok(StreamingMode::None),
            "SERVER_SENT_EVENTS" | "SSE" => Ok(StreamingMode::Sse),
            "BIDIRECTIONAL" | "BIDI" => Ok(StreamingMode::Bidi),
            _ => Err(ParseStreamingModeError(s.to_string())),
        }
    }
}

impl Serialize for StreamingMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StreamingMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Execution path a Runner must take for a given configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectiveTransport {
    SingleResponse,
    ServerSentEvents,
    /// Bidirectional-capable backend; also used for SSE runs with
    /// compositional function calling, since only that backend implements it.
    Bidirectional,
}

impl EffectiveTransport {
    pub(crate) fn resolve(mode: StreamingMode, compositional_function_calling: bool) -> Self {
        match (mode, compositional_function_calling) {
            (StreamingMode::None, _) => EffectiveTransport::SingleResponse,
            (StreamingMode::Sse, true) => EffectiveTransport::Bidirectional,
            (StreamingMode::Sse, false) => EffectiveTransport::ServerSentEvents,
            (StreamingMode::Bidi, _) => EffectiveTransport::Bidirectional,
        }
    }
}

impl fmt::Display for EffectiveTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EffectiveTransport::SingleResponse => "SINGLE_RESPONSE",
            EffectiveTransport::ServerSentEvents => "SERVER_SENT_EVENTS",
            EffectiveTransport::Bidirectional => "BIDIRECTIONAL",
        };
        f.write_str(s)
    }
}
