//! Normalization of the completion text into a guaranteed-shape result.
//!
//! The model's output is untrusted free text, so parsing and shape-checking
//! are explicit, fallible steps. A reply that omits or malforms the top-level
//! `actionItems` array or `summary` string is rejected rather than silently
//! passed through. Item-level fields other than the injected `id` are NOT
//! content-checked: an out-of-enum `priority` or a numeric `deadline` travels
//! through unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{ExtractionError, Result};

/// Source of the per-request timestamp used for item ids.
///
/// Injected so tests can pin the stamp and get reproducible ids.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// Wall-clock [`Clock`] used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// The normalized extraction result.
///
/// `action_items` is always an array, possibly empty. Each item is carried
/// as a JSON object so model-authored fields pass through untouched; the
/// only guaranteed key is the injected `id`. The canonical item shape is
/// `{ id, task, assignee, priority, deadline, context }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(rename = "actionItems")]
    pub action_items: Vec<Map<String, Value>>,
    pub summary: String,
}

/// Parses and shape-checks the completion text, injecting stable item ids.
///
/// Ids have the form `item-<stamp>-<index>` with one stamp per result and a
/// zero-based index, so ids are unique within a result and reproducible for
/// a given stamp. A model-supplied `id` is overwritten.
pub fn normalize(raw_text: &str, stamp_millis: u64) -> Result<ExtractionResult> {
    let value: Value =
        serde_json::from_str(raw_text).map_err(|e| ExtractionError::MalformedJson {
            reason: e.to_string(),
        })?;

    let Value::Object(mut top) = value else {
        return Err(ExtractionError::UnexpectedShape {
            reason: "top level is not an object".to_string(),
        });
    };

    let summary = match top.remove("summary") {
        Some(Value::String(summary)) => summary,
        Some(_) => {
            return Err(ExtractionError::UnexpectedShape {
                reason: "summary is not a string".to_string(),
            });
        }
        None => {
            return Err(ExtractionError::UnexpectedShape {
                reason: "summary is missing".to_string(),
            });
        }
    };

    let items = match top.remove("actionItems") {
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(ExtractionError::UnexpectedShape {
                reason: "actionItems is not an array".to_string(),
            });
        }
        None => {
            return Err(ExtractionError::UnexpectedShape {
                reason: "actionItems is missing".to_string(),
            });
        }
    };

    let action_items = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let Value::Object(mut fields) = item else {
                return Err(ExtractionError::UnexpectedShape {
                    reason: format!("action item {index} is not an object"),
                });
            };
            fields.insert(
                "id".to_string(),
                Value::String(format!("item-{stamp_millis}-{index}")),
            );
            Ok(fields)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ExtractionResult {
        action_items,
        summary,
    })
}
