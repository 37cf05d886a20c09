//! `boardwalk dump` command

use anyhow::{Context, Result};

use crate::cli::DumpArgs;
use boardwalk::core::board::BoardConfig;
use boardwalk::core::env::EnvSnapshot;
use boardwalk::ops::dump::dump_ide_data;

pub fn execute(args: DumpArgs) -> Result<()> {
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

    let data = dump_ide_data(&mut snapshot);

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&data)
    } else {
        serde_json::to_string(&data)
    }
    .context("failed to serialize IDE data record")?;

    match &args.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", rendered),
    }

    Ok(())
}
