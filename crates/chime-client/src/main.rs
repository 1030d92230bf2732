//! # chime-replay
//!
//! Normalizes recorded API responses and prints the resulting entities as
//! JSON.  Recordings are read from `CHIME_REPLAY_DIR` (default
//! `./fixtures`), laid out by API path: `calls.json`, `users/<id>.json`,
//! `chat/<user_id>/messages.json`, and so on.

use anyhow::{bail, Context};
use tracing::info;

use chime_client::{init_tracing, ClientConfig, ReplayTransport, Repository};
use chime_shared::constants::APP_NAME;

const USAGE: &str = "usage: chime-replay \
    <user <id> | calls | packages | transactions | messages <user_id> | conversations>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env();
    init_tracing(&config);

    info!("Starting {} replay v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    info!(?config, "Loaded configuration");

    let mut args = std::env::args().skip(1);
    let kind = args.next().context(USAGE)?;

    let transport = ReplayTransport::new(config.replay_dir.clone());
    let repo = Repository::new(transport, config);

    let json = match kind.as_str() {
        "user" => {
            let id = args.next().context("missing user id")?;
            serde_json::to_string_pretty(&repo.user(&id).await?)?
        }
        "calls" => serde_json::to_string_pretty(&repo.calls().await?)?,
        "packages" => serde_json::to_string_pretty(&repo.coin_packages().await?)?,
        "transactions" => serde_json::to_string_pretty(&repo.transactions().await?)?,
        "messages" => {
            let user_id = args.next().context("missing user id")?;
            serde_json::to_string_pretty(&repo.messages(&user_id).await?)?
        }
        "conversations" => serde_json::to_string_pretty(&repo.conversations().await?)?,
        other => bail!("unknown record kind '{other}'\n{USAGE}"),
    };

    println!("{json}");
    Ok(())
}
