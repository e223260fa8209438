//! Render-facing payloads shared by the page renderer, the preview server and the CLI.

use serde::{Deserialize, Serialize};

use crate::domain::SampleId;

/// Everything the presentation layer needs for the active sample. All fields
/// are derived from one entry, so a title is never shown next to another
/// sample's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    pub title: String,
    pub source_text: String,
    pub expected_output: String,
    pub download_href: String,
    pub download_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSummary {
    pub id: SampleId,
    pub title: String,
}

/// Sidebar entry in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: SampleId,
    pub title: String,
    pub href: String,
    pub active: bool,
}
