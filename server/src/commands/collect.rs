use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::{Result, WrapErr};
use convos::{assemble, DEFAULT_MAX_ROUNDS};
use tracing::info;

use crate::AppState;

#[derive(Debug, Args)]
pub(crate) struct CollectArgs {
    /// Handle to assemble conversations for.
    pub(crate) handle: String,

    /// Where to write the JSON output.
    #[clap(long, default_value = "tweets.json")]
    pub(crate) out: PathBuf,
}

pub(crate) async fn collect(args: &CollectArgs) -> Result<()> {
    let state = AppState::from_env()?;

    let set = assemble(&state.twitter, &args.handle, DEFAULT_MAX_ROUNDS).await?;
    info!(
        roots = set.roots.len(),
        users = set.users.len(),
        "assembled conversations for @{}",
        args.handle
    );

    let file = std::fs::File::create(&args.out)
        .wrap_err_with(|| format!("Could not create {}", args.out.display()))?;
    serde_json::to_writer(file, &set).wrap_err("Could not serialize conversations")?;

    info!("Wrote {}", args.out.display());

    Ok(())
}
