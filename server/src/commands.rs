use clap::Subcommand;
use color_eyre::Result;

pub(crate) mod collect;
pub(crate) mod serve;

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Run the HTTP server. The default when no subcommand is given.
    Serve,
    /// Assemble conversations for a handle and write them to a JSON file.
    Collect(collect::CollectArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve
    }
}

impl Command {
    pub(crate) async fn run(&self) -> Result<()> {
        match &self {
            Command::Serve => serve::serve().await,
            Command::Collect(args) => collect::collect(args).await,
        }
    }
}
