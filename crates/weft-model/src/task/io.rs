use serde::{Deserialize, Serialize};

/// A file staged into the task's workspace before execution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Source URL. Absent when `content` carries the data inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Destination path inside the task workspace.
    pub path: String,

    /// Inline file content. Cleared when a view is built with redaction, so
    /// large embedded payloads are not re-transmitted on every query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A file collected from the task's workspace after execution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Destination URL the file is delivered to.
    pub url: String,

    /// Source path inside the task workspace.
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_with_inline_content_roundtrips() {
        let input = TaskInput {
            name: Some("config".into()),
            description: None,
            url: None,
            path: "/work/config.txt".into(),
            content: Some("key=value".into()),
        };

        let json = serde_json::to_string(&input).unwrap();
        assert!(!json.contains("url"));
        let back: TaskInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn output_requires_url_and_path() {
        let err = serde_json::from_str::<TaskOutput>(r#"{"path": "/work/out"}"#);
        assert!(err.is_err(), "missing url should fail to deserialize");

        let ok: TaskOutput =
            serde_json::from_str(r#"{"url": "file:///tmp/out", "path": "/work/out"}"#).unwrap();
        assert_eq!(ok.url, "file:///tmp/out");
    }
}
