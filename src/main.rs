use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use serde_json::Value;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use randomorg_node::{
    context::Context,
    model::{
        item::InputItem,
        parameter::{NodeParameters, ParameterValue},
        request::RANDOM_ORG_ENDPOINT,
    },
    use_case::Execute,
};

/// Draws one true random integer per input item from Random.org.
#[derive(Parser)]
#[command(version, about)]
struct Opt {
    /// JSON array of item bodies; a single empty item is processed when omitted
    #[arg(short, long, env = "RANDOM_NODE_INPUT")]
    input: Option<PathBuf>,
    #[arg(
        long,
        env = "RANDOM_NODE_OPERATION",
        default_value = "generateRandomNumber"
    )]
    operation: ParameterValue,
    /// Inclusive lower bound, or an expression such as `{{ $json.min }}`
    #[arg(long, env = "RANDOM_NODE_MIN", default_value = "1", allow_hyphen_values = true)]
    min: ParameterValue,
    /// Inclusive upper bound, or an expression such as `{{ $json.max }}`
    #[arg(long, env = "RANDOM_NODE_MAX", default_value = "100", allow_hyphen_values = true)]
    max: ParameterValue,
    /// Record failing items as `{ "error": ... }` instead of aborting the batch
    #[arg(long, env = "RANDOM_NODE_CONTINUE_ON_FAIL")]
    continue_on_fail: bool,
    #[arg(long, env = "RANDOM_NODE_ENDPOINT", default_value = RANDOM_ORG_ENDPOINT, hide = true)]
    endpoint: String,
}

async fn read_items(input: Option<PathBuf>) -> Result<Vec<InputItem>> {
    let path = match input {
        Some(path) => path,
        None => return Ok(vec![InputItem::empty()]),
    };

    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("cannot read {}", path.display()))?;
    let values: Vec<Value> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array", path.display()))?;

    Ok(values.into_iter().map(InputItem::new).collect())
}

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)?;

    let items = read_items(opt.input).await?;
    let parameters = NodeParameters {
        operation: opt.operation,
        min: opt.min,
        max: opt.max,
    };
    debug!("parameters: {:?}", parameters);

    let ctx = Context::new(items, parameters)?
        .with_continue_on_fail(opt.continue_on_fail)
        .with_endpoint(opt.endpoint);

    let output = match ctx.execute().await {
        Ok(output) => output,
        Err(e) => {
            error!("error: {}", &e);
            return Err(e.into());
        }
    };

    let json = serde_json::to_string_pretty(&output).context("cannot serialize output")?;
    println!("{}", json);
    Ok(())
}
