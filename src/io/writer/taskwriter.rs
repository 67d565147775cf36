//! Label Studio task export.
//!
//! The nesting below is Label Studio's import contract and has to be
//! preserved bit-for-bit: `{"data": {...}, "predictions": [{"result":
//! [{"from_name": "label", "to_name": "text", "type": "choices", "value":
//! {"choices": [<category>]}}]}]}`.
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::sampling::SampledItem;

const FROM_NAME: &str = "label";
const TO_NAME: &str = "text";
const RESULT_TYPE: &str = "choices";

/// One import task: the post text plus a single suggested-label prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub data: TaskData,
    pub predictions: Vec<TaskPrediction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskData {
    pub text: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPrediction {
    pub result: Vec<TaskResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResult {
    pub from_name: String,
    pub to_name: String,
    #[serde(rename = "type")]
    pub result_type: String,
    pub value: TaskValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskValue {
    pub choices: Vec<String>,
}

/// Build the task array for a selection, preserving item order.
///
/// Task ids reuse the posts' ingestion ids (`post_<id>`), which are unique
/// within a run and survive any later renumbering of the selection.
pub fn tasks_for(items: &[SampledItem]) -> Vec<Task> {
    items
        .iter()
        .map(|item| Task {
            data: TaskData {
                text: item.text().to_string(),
                id: format!("post_{}", item.id()),
            },
            predictions: vec![TaskPrediction {
                result: vec![TaskResult {
                    from_name: FROM_NAME.to_string(),
                    to_name: TO_NAME.to_string(),
                    result_type: RESULT_TYPE.to_string(),
                    value: TaskValue {
                        choices: vec![item.category().label().to_string()],
                    },
                }],
            }],
        })
        .collect()
}

/// Writes the selection as a pretty-printed Label Studio import file.
pub struct TaskWriter;

impl TaskWriter {
    pub fn write(dst: &Path, items: &[SampledItem]) -> Result<(), Error> {
        let file = File::create(dst)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &tasks_for(items))?;

        Ok(())
    }
}
