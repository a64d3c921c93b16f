use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A devotional text (Oração) shown by the content viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Prayer {
    pub title: String,
    pub short_description: String,
    pub context_note: String,
    pub full_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_text: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
}

/// What the viewer may display for a prayer, after premium gating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", tag = "access")]
#[ts(export)]
pub enum PrayerBody {
    /// Full text is visible.
    Open { text: String },
    /// Premium text without entitlement. The host shows the preview, if any,
    /// next to the upgrade link.
    Locked { preview: Option<String> },
}

impl Prayer {
    /// Apply premium gating for a viewer with or without premium access.
    pub fn body(&self, has_premium: bool) -> PrayerBody {
        if self.is_premium && !has_premium {
            PrayerBody::Locked {
                preview: self
                    .preview_text
                    .as_ref()
                    .filter(|p| !p.trim().is_empty())
                    .cloned(),
            }
        } else {
            PrayerBody::Open {
                text: self.full_text.clone(),
            }
        }
    }
}
