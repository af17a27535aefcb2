use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const RANDOM_ORG_SOURCE: &str = "Random.org";

/// A record handed over by the workflow host. Only its position in the batch
/// matters to the pipeline; the body is what parameter expressions look into.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputItem {
    pub json: Value,
}

impl InputItem {
    pub fn new(json: Value) -> InputItem {
        InputItem { json }
    }

    pub fn empty() -> InputItem {
        InputItem::new(Value::Object(Default::default()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub random_number: i64,
    pub min: i64,
    pub max: i64,
    pub source: String,
    pub timestamp: String,
}

impl ResultItem {
    pub fn new(random_number: i64, min: i64, max: i64, timestamp: String) -> ResultItem {
        ResultItem {
            random_number,
            min,
            max,
            source: RANDOM_ORG_SOURCE.to_owned(),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorItem {
    pub error: String,
}

impl ErrorItem {
    pub fn new(error: impl Into<String>) -> ErrorItem {
        ErrorItem {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputJson {
    Result(ResultItem),
    Error(ErrorItem),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputItem {
    pub json: OutputJson,
}

impl OutputItem {
    pub fn as_result(&self) -> Option<&ResultItem> {
        match &self.json {
            OutputJson::Result(item) => Some(item),
            OutputJson::Error(_) => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorItem> {
        match &self.json {
            OutputJson::Error(item) => Some(item),
            OutputJson::Result(_) => None,
        }
    }
}

impl From<ResultItem> for OutputItem {
    fn from(item: ResultItem) -> Self {
        OutputItem {
            json: OutputJson::Result(item),
        }
    }
}

impl From<ErrorItem> for OutputItem {
    fn from(item: ErrorItem) -> Self {
        OutputItem {
            json: OutputJson::Error(item),
        }
    }
}

/// Where a single item currently is in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Pending,
    Validating,
    Requesting,
    Parsing,
    Completed,
    Failed,
}

impl Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ItemState::Pending => "pending",
            ItemState::Validating => "validating",
            ItemState::Requesting => "requesting",
            ItemState::Parsing => "parsing",
            ItemState::Completed => "completed",
            ItemState::Failed => "failed",
        })
    }
}
