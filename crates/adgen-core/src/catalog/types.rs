use serde::Serialize;

/// One documented override key.
///
/// Catalog rows are compiled into the binary and never mutated. The `group`
/// names the request object the key feeds (`device`, `geo`, ...) and is only
/// used to group keys for display; it never decides whether a key is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterEntry {
    pub key: &'static str,
    pub group: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    /// Placeholder shown when no value has been typed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hint: Option<&'static str>,
}

impl ParameterEntry {
    pub(crate) const fn new(
        key: &'static str,
        group: &'static str,
        description: &'static str,
        example: &'static str,
        default_hint: Option<&'static str>,
    ) -> Self {
        Self {
            key,
            group,
            description,
            example,
            default_hint,
        }
    }

    /// One-line help text, e.g. `Minimum bid in CPM. Example: 0.5`.
    pub fn summary(&self) -> String {
        format!("{}. Example: {}", self.description, self.example)
    }

    /// Placeholder for an empty value field.
    pub fn placeholder(&self) -> &'static str {
        self.default_hint.unwrap_or("Value")
    }
}
