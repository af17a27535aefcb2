use crate::context::{ConfigContext, HttpContext, ParameterContext, TimeContext};
use crate::error::{Error, Result};
use crate::model::{
    item::{ItemState, ResultItem},
    parameter::{validate_range, Operation},
    request::RandomOrgRequest,
    response::parse_integer,
};

use tracing::debug;

#[async_trait::async_trait]
pub trait GenerateRandomNumber: ParameterContext + HttpContext + TimeContext + ConfigContext {
    /// Runs the pipeline for one item. `Ok(None)` means the item's operation
    /// is not one this node produces output for.
    async fn generate_random_number(&self, item_index: usize) -> Result<Option<ResultItem>> {
        debug!(item_index, state = %ItemState::Pending);
        if let Operation::Unsupported(operation) = self.resolve_operation(item_index)? {
            debug!(item_index, "skip unsupported operation {}", operation);
            return Ok(None);
        }
        let (min, max) = self.resolve_range(item_index)?;

        debug!(item_index, state = %ItemState::Validating, min, max);
        validate_range(item_index, min, max)?;

        let request = RandomOrgRequest::integer_at(self.endpoint(), min, max);
        debug!(
            item_index,
            state = %ItemState::Requesting,
            url = %request.url,
            timeout_ms = request.timeout_ms()
        );
        let body = self
            .get_text(&request)
            .await
            .map_err(|source| Error::Network { item_index, source })?;

        debug!(item_index, state = %ItemState::Parsing);
        let random_number = match parse_integer(&body) {
            Some(n) => n,
            None => return Err(Error::InvalidResponse { item_index, body }),
        };

        debug!(item_index, state = %ItemState::Completed, random_number);
        Ok(Some(ResultItem::new(random_number, min, max, self.timestamp())))
    }
}

impl<T: ParameterContext + HttpContext + TimeContext + ConfigContext> GenerateRandomNumber for T {}
