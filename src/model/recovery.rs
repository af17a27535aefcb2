use crate::error::{Error, Result};
use crate::model::item::{ErrorItem, ResultItem};

#[derive(Debug)]
pub enum Action {
    Append(ResultItem),
    AppendAndContinue(ErrorItem),
    /// The item's operation is not handled; nothing is appended.
    Skip,
    Abort(Error),
}

/// Decides what happens to the batch after one item has been processed.
pub fn recover(outcome: Result<Option<ResultItem>>, continue_on_fail: bool) -> Action {
    match outcome {
        Ok(Some(item)) => Action::Append(item),
        Ok(None) => Action::Skip,
        Err(e) if continue_on_fail => Action::AppendAndContinue(ErrorItem::new(e.to_string())),
        Err(e) => Action::Abort(e),
    }
}
