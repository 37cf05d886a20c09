//! `boardwalk includes` command

use anyhow::{Context, Result};

use crate::cli::IncludesArgs;
use boardwalk::core::env::EnvSnapshot;
use boardwalk::ops::dump::dump_includes;

pub fn execute(args: IncludesArgs) -> Result<()> {
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

    let snapshot = EnvSnapshot::load(&snapshot_path)
        .with_context(|| format!("failed to load {}", snapshot_path.display()))?;

    for path in dump_includes(&snapshot) {
        println!("{}", path.display());
    }

    Ok(())
}
