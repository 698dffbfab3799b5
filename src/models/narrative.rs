use serde::{Deserialize, Serialize};

/// Four-act summary of a process report. Acts absent from the source stay
/// `None` and are omitted from serialized output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NarrativeSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ki: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sho: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ten: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ketsu: Option<String>,
}

impl NarrativeSummary {
    pub fn is_empty(&self) -> bool {
        self.ki.is_none() && self.sho.is_none() && self.ten.is_none() && self.ketsu.is_none()
    }
}
