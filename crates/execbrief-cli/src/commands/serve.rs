//! Start the local HTTP surface for the UI layer

use crate::app::ServeArgs;
use anyhow::Result;
use execbrief_core::{ClaudeClient, ZeroEntropyClient};
use execbrief_server::{start_server, AppState};
use std::sync::Arc;

pub async fn run(
    args: ServeArgs,
    zeroentropy: Arc<ZeroEntropyClient>,
    claude: Arc<ClaudeClient>,
) -> Result<()> {
    let state = AppState::new(zeroentropy, claude);
    start_server(state, args.addr).await?;
    Ok(())
}
