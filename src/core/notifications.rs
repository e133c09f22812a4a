//! Notifications exchanged with the dashboard host.
//!
//! Inbound names are the host's contract and are matched verbatim by
//! [`Notification::parse`]. Payloads arrive as JSON values.

use serde::Serialize;
use serde_json::Value;

pub const VIEW_READY: &str = "DOM_OBJECTS_CREATED";
pub const ALL_MODULES_STARTED: &str = "ALL_MODULES_STARTED";
pub const NEXT_SCREEN: &str = "TOUCHSCREENS_NEXT_SCREEN";
pub const PREVIOUS_SCREEN: &str = "TOUCHSCREENS_PREVIOUS_SCREEN";
pub const GO_TO_SCREEN: &str = "TOUCHSCREENS_GO_TO_SCREEN";

/// Notification received from the host
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// The pager's view is mounted; initialize
    ViewReady,
    /// Every host module is running; sync visibility once
    AllModulesStarted,
    NextScreen,
    PreviousScreen,
    /// Jump request; the payload must be a well-formed integer
    GoToScreen(Value),
}

impl Notification {
    /// Build a notification from a host name and payload.
    ///
    /// Names the pager does not handle return `None`.
    pub fn parse(name: &str, payload: Value) -> Option<Self> {
        match name {
            VIEW_READY => Some(Self::ViewReady),
            ALL_MODULES_STARTED => Some(Self::AllModulesStarted),
            NEXT_SCREEN => Some(Self::NextScreen),
            PREVIOUS_SCREEN => Some(Self::PreviousScreen),
            GO_TO_SCREEN => Some(Self::GoToScreen(payload)),
            _ => None,
        }
    }

    pub fn go_to(index: usize) -> Self {
        Self::GoToScreen(Value::from(index))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ViewReady => VIEW_READY,
            Self::AllModulesStarted => ALL_MODULES_STARTED,
            Self::NextScreen => NEXT_SCREEN,
            Self::PreviousScreen => PREVIOUS_SCREEN,
            Self::GoToScreen(_) => GO_TO_SCREEN,
        }
    }
}

/// Interpret a jump payload. Only non-negative integers qualify; negative
/// integers are well-formed but can never be in range.
pub fn screen_index_from_payload(payload: &Value) -> Option<usize> {
    payload.as_u64().and_then(|n| usize::try_from(n).ok())
}

/// Notification published to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "notification", content = "payload")]
pub enum HostNotification {
    #[serde(rename = "TOUCHSCREENS_SCREEN_CHANGED")]
    ScreenChanged {
        // Host listeners read the index as `screen`
        #[serde(rename = "screen")]
        screen_index: usize,
        #[serde(rename = "totalScreens")]
        total_screens: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_known_names() {
        assert_eq!(
            Notification::parse("DOM_OBJECTS_CREATED", Value::Null),
            Some(Notification::ViewReady)
        );
        assert_eq!(
            Notification::parse("TOUCHSCREENS_GO_TO_SCREEN", json!(2)),
            Some(Notification::GoToScreen(json!(2)))
        );
        assert_eq!(Notification::parse("CLOCK_SECOND", Value::Null), None);
    }

    #[test]
    fn test_payload_must_be_integer() {
        assert_eq!(screen_index_from_payload(&json!(3)), Some(3));
        assert_eq!(screen_index_from_payload(&json!(1.5)), None);
        assert_eq!(screen_index_from_payload(&json!("2")), None);
        assert_eq!(screen_index_from_payload(&json!(-1)), None);
        assert_eq!(screen_index_from_payload(&Value::Null), None);
    }

    #[test]
    fn test_screen_changed_serialization() {
        let n = HostNotification::ScreenChanged {
            screen_index: 1,
            total_screens: 4,
        };
        assert_eq!(
            serde_json::to_value(&n).unwrap(),
            json!({
                "notification": "TOUCHSCREENS_SCREEN_CHANGED",
                "payload": { "screen": 1, "totalScreens": 4 }
            })
        );
    }
}
