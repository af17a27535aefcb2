use std::sync::Arc;

use crate::error::{NetworkError, Result};
use crate::model::{
    item::InputItem,
    parameter::{NodeParameters, Operation},
    request::{Method, RandomOrgRequest, RANDOM_ORG_ENDPOINT},
};

use anyhow::{anyhow, Context as _};
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::debug;

mod config;
mod http;
mod input;
mod parameter;
mod time;

pub use config::ConfigContext;
pub use http::HttpContext;
pub use input::InputContext;
pub use parameter::ParameterContext;
pub use time::TimeContext;

/// Host context for one node invocation: the batch, the node's parameters and
/// an HTTP client for Random.org.
#[derive(Clone)]
pub struct Context {
    http: Client,
    items: Arc<[InputItem]>,
    parameters: Arc<NodeParameters>,
    continue_on_fail: bool,
    endpoint: String,
}

impl Context {
    pub fn new(items: Vec<InputItem>, parameters: NodeParameters) -> Result<Context> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("cannot build HTTP client")?;

        Ok(Context {
            http,
            items: items.into(),
            parameters: Arc::new(parameters),
            continue_on_fail: false,
            endpoint: RANDOM_ORG_ENDPOINT.to_owned(),
        })
    }

    pub fn with_continue_on_fail(mut self, continue_on_fail: bool) -> Context {
        self.continue_on_fail = continue_on_fail;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Context {
        self.endpoint = endpoint.into();
        self
    }
}

impl InputContext for Context {
    fn input_items(&self) -> &[InputItem] {
        &self.items
    }
}

impl Context {
    fn item(&self, item_index: usize) -> Result<&InputItem> {
        let item = self
            .items
            .get(item_index)
            .ok_or_else(|| anyhow!("no input item at index {}", item_index))?;
        Ok(item)
    }
}

impl ParameterContext for Context {
    fn resolve_operation(&self, item_index: usize) -> Result<Operation> {
        self.parameters.resolve_operation(item_index, self.item(item_index)?)
    }

    fn resolve_range(&self, item_index: usize) -> Result<(i64, i64)> {
        self.parameters.resolve_range(item_index, self.item(item_index)?)
    }
}

#[async_trait::async_trait]
impl HttpContext for Context {
    async fn get_text(
        &self,
        request: &RandomOrgRequest,
    ) -> std::result::Result<String, NetworkError> {
        debug!("request: {}", request.url);
        let builder = match request.method {
            Method::Get => self.http.get(&request.url),
        };

        let response = builder
            .timeout(request.timeout)
            .send()
            .await?
            .error_for_status()?;
        debug!("response status: {}", response.status());

        Ok(response.text().await?)
    }
}

impl TimeContext for Context {
    fn current_time(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl ConfigContext for Context {
    fn continue_on_fail(&self) -> bool {
        self.continue_on_fail
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
