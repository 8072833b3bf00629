use serde::{Deserialize, Serialize};

/// One named item shown in an info card's list section.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Entry {
    pub name: String,
    /// Secondary line under the name. Empty unless the caller provides one.
    #[serde(default)]
    pub detail: String,
}

impl Entry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: String::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }
}

/// Everything one info card displays.
///
/// `entries` is rendered in the order given.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CardContent {
    pub title: String,
    pub description: String,
    pub section_label: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl CardContent {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        section_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            section_label: section_label.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entries(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
