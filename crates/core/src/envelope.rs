//! Response envelopes shared by the API service and the client.
//!
//! Every write response and every error carries a boolean `success` flag.
//! List endpoints return bare arrays and are not enveloped.

use serde::{Deserialize, Serialize};

use crate::models::project::Project;
use crate::models::skill::Skill;

/// Message returned by a successful project delete.
pub const MSG_PROJECT_DELETED: &str = "Deleted";

/// Message returned by a successful skill delete.
pub const MSG_SKILL_DELETED: &str = "Skill deleted";

/// Message returned when a contact message is stored.
pub const MSG_CONTACT_SAVED: &str = "Message saved successfully!";

/// Plain-text body of the root liveness route.
pub const LIVENESS_TEXT: &str = "Portfolio API is running...";

/// `{ "success": true, "project": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEnvelope {
    pub success: bool,
    pub project: Project,
}

/// `{ "success": true, "skill": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEnvelope {
    pub success: bool,
    pub skill: Skill,
}

/// `{ "success": ..., "msg": ... }`, used both for acknowledgements and for
/// errors. Errors also carry a machine-readable `code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEnvelope {
    pub success: bool,
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ProjectEnvelope {
    pub fn ok(project: Project) -> Self {
        Self {
            success: true,
            project,
        }
    }
}

impl SkillEnvelope {
    pub fn ok(skill: Skill) -> Self {
        Self {
            success: true,
            skill,
        }
    }
}

impl MessageEnvelope {
    pub fn ok(msg: impl Into<String>) -> Self {
        Self {
            success: true,
            msg: msg.into(),
            code: None,
        }
    }

    pub fn error(code: &str, msg: impl Into<String>) -> Self {
        Self {
            success: false,
            msg: msg.into(),
            code: Some(code.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_has_no_code_field() {
        let json = serde_json::to_value(MessageEnvelope::ok(MSG_PROJECT_DELETED)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "msg": "Deleted"}));
    }

    #[test]
    fn error_envelope_carries_code() {
        let json =
            serde_json::to_value(MessageEnvelope::error("NOT_FOUND", "missing")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["msg"], "missing");
        assert_eq!(json["code"], "NOT_FOUND");
    }

    #[test]
    fn error_envelope_without_code_still_decodes() {
        let env: MessageEnvelope =
            serde_json::from_str(r#"{"success": false, "msg": "boom"}"#).unwrap();
        assert!(!env.success);
        assert!(env.code.is_none());
    }
}
