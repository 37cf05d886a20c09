//! `boardwalk defines` command

use anyhow::{Context, Result};

use crate::cli::DefinesArgs;
use boardwalk::core::board::BoardConfig;
use boardwalk::core::env::EnvSnapshot;
use boardwalk::ops::dump::dump_defines;

pub fn execute(args: DefinesArgs) -> Result<()> {
    let snapshot_path = match &args.env {
        Some(path) => path.clone(),
        None => {
            let cwd =
                std::env::current_dir().context("failed to determine current directory")?;
            EnvSnapshot::find(&cwd).map_err(|err| {
                anyhow::anyhow!(
                    "{}\nhelp: pass --env <path> or run inside a configured project",
                    err
                )
            })?
        }
    };

    let mut snapshot = EnvSnapshot::load(&snapshot_path)
        .with_context(|| format!("failed to load {}", snapshot_path.display()))?;

    if let Some(board_path) = &args.board {
        snapshot.board = Some(BoardConfig::from_json_file(board_path)?);
    }

    for define in dump_defines(&snapshot) {
        println!("{}", define);
    }

    Ok(())
}
