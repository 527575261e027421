//! Host lifecycle event wire types.

use serde::{Deserialize, Serialize};

/// Event type emitted by the host when a session is created.
pub const SESSION_CREATED: &str = "session.created";

/// A lifecycle event delivered by the host to plugin event handlers.
///
/// The wire shape is fixed by the host:
/// `{ "type": "...", "properties": { "info": { "parentID": "..." } } }`.
/// Fields beyond the ones modeled here are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostEvent {
    /// Event type tag, e.g. `"session.created"`.
    #[serde(rename = "type")]
    pub event_type: String,

    /// Event-specific payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<EventProperties>,
}

/// Payload of a lifecycle event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventProperties {
    /// Session info attached to session events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<SessionInfo>,
}

/// Session info carried by session events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionInfo {
    /// ID of the parent session, present only for subagent sessions.
    #[serde(rename = "parentID", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl HostEvent {
    /// Create an event with the given type tag and no payload.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            properties: None,
        }
    }

    /// Create a `session.created` event for a root session.
    pub fn session_created() -> Self {
        Self::new(SESSION_CREATED)
    }

    /// Create a `session.created` event for a subagent session.
    pub fn session_created_with_parent(parent_id: impl Into<String>) -> Self {
        Self {
            event_type: SESSION_CREATED.to_string(),
            properties: Some(EventProperties {
                info: Some(SessionInfo {
                    parent_id: Some(parent_id.into()),
                }),
            }),
        }
    }

    /// Get the parent session ID, if any.
    pub fn parent_id(&self) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|p| p.info.as_ref())
            .and_then(|i| i.parent_id.as_deref())
    }

    /// True only for a `session.created` event with no parent session.
    pub fn is_root_session_created(&self) -> bool {
        self.event_type == SESSION_CREATED && self.parent_id().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_session_created() {
        let event = HostEvent::session_created();
        assert!(event.is_root_session_created());
    }

    #[test]
    fn test_subagent_session_not_root() {
        let event = HostEvent::session_created_with_parent("ses_123");
        assert!(!event.is_root_session_created());
        assert_eq!(event.parent_id(), Some("ses_123"));
    }

    #[test]
    fn test_other_event_not_root() {
        let event = HostEvent::new("session.idle");
        assert!(!event.is_root_session_created());
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let event: HostEvent = serde_json::from_str(
            r#"{"type":"session.created","properties":{"info":{"parentID":"ses_parent"}}}"#,
        )
        .unwrap();

        assert_eq!(event.event_type, SESSION_CREATED);
        assert_eq!(event.parent_id(), Some("ses_parent"));
    }

    #[test]
    fn test_deserialize_without_properties() {
        let event: HostEvent = serde_json::from_str(r#"{"type":"session.created"}"#).unwrap();
        assert!(event.is_root_session_created());
    }

    #[test]
    fn test_unknown_payload_fields_ignored() {
        let event: HostEvent = serde_json::from_str(
            r#"{"type":"session.created","properties":{"info":{"parentID":null,"title":"x"}}}"#,
        )
        .unwrap();
        assert!(event.is_root_session_created());
    }
}
