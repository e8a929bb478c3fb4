//! Plan model
//!
//! Plan descriptors are opaque to the store. The commonly read keys are typed,
//! everything else is carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Plan {
    pub fn new(product_slug: impl Into<String>) -> Self {
        Self {
            product_slug: Some(product_slug.into()),
            ..Self::default()
        }
    }
}
