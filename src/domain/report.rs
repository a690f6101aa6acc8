//! The result record printed to stdout for the invoking backend

use serde::Serialize;

/// Outcome of one invocation, serialized as a single JSON line on stdout.
///
/// This is the whole stdout contract: `success` plus exactly one of `message`
/// (success) or `error` (failure). The caller parses this line; nothing else
/// may be written to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendReport {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Process exit code for this report: 0 only for a successful send.
    pub fn exit_code(&self) -> i32 {
        if self.success {
            0
        } else {
            1
        }
    }

    /// Compact single-line JSON rendering.
    pub fn to_json_line(&self) -> String {
        // Serialization of three plain fields cannot fail; the fallback keeps
        // the stdout contract (valid JSON, success:false) even if it somehow
        // does.
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"success":false,"error":"report serialization failed"}"#.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_report_shape() {
        let report = SendReport::success("verification email sent");
        assert_eq!(
            report.to_json_line(),
            r#"{"success":true,"message":"verification email sent"}"#
        );
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_failure_report_shape() {
        let report = SendReport::failure("failed to send verification email");
        assert_eq!(
            report.to_json_line(),
            r#"{"success":false,"error":"failed to send verification email"}"#
        );
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let line = SendReport::success("ok").to_json_line();
        assert!(!line.contains("error"));

        let line = SendReport::failure("no").to_json_line();
        assert!(!line.contains("message"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let a = SendReport::success("verification email sent").to_json_line();
        let b = SendReport::success("verification email sent").to_json_line();
        assert_eq!(a, b);
    }

    #[test]
    fn test_report_is_single_line() {
        let report = SendReport::failure("usage error: expected exactly two arguments");
        assert!(!report.to_json_line().contains('\n'));
    }
}
