use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Payload for the paywall modal: the locked feature and what premium adds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpsellOffer {
    pub feature_name: String,
    #[serde(default)]
    pub benefits: Vec<String>,
}

impl UpsellOffer {
    pub fn new(feature_name: impl Into<String>) -> Self {
        Self {
            feature_name: feature_name.into(),
            benefits: Vec::new(),
        }
    }

    pub fn with_benefit(mut self, benefit: impl Into<String>) -> Self {
        self.benefits.push(benefit.into());
        self
    }
}
