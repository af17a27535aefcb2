use crate::context::{ConfigContext, InputContext};
use crate::error::Result;
use crate::model::{
    item::{ItemState, OutputItem},
    recovery::{recover, Action},
};
use crate::use_case::GenerateRandomNumber;

use tracing::{error, info, warn};

#[async_trait::async_trait]
pub trait Execute: GenerateRandomNumber + InputContext + ConfigContext {
    /// Processes the whole batch in input order, one item at a time.
    async fn execute(&self) -> Result<Vec<Vec<OutputItem>>> {
        let item_count = self.input_items().len();
        let continue_on_fail = self.continue_on_fail();
        info!("execute batch of {} items", item_count);

        let mut output = Vec::with_capacity(item_count);
        for item_index in 0..item_count {
            let outcome = self.generate_random_number(item_index).await;

            match recover(outcome, continue_on_fail) {
                Action::Append(item) => {
                    info!(item_index, "random number: {}", item.random_number);
                    output.push(OutputItem::from(item));
                }
                Action::AppendAndContinue(item) => {
                    warn!(
                        item_index,
                        state = %ItemState::Failed,
                        "continue after error: {}",
                        item.error
                    );
                    output.push(OutputItem::from(item));
                }
                Action::Skip => {}
                Action::Abort(e) => {
                    error!(item_index, state = %ItemState::Failed, "abort batch: {}", &e);
                    return Err(e);
                }
            }
        }

        Ok(vec![output])
    }
}

impl<T: GenerateRandomNumber + InputContext + ConfigContext> Execute for T {}
