use std::fs;
use std::io;

use crate::cli::{CodesArgs, Result};
use crate::display;

pub fn codes(args: CodesArgs) -> Result<()> {
    let (_, _, tree) = crate::cli::load(&args.input)?;

    let mut stdout = io::stdout().lock();
    display::write_weights(&tree, &mut stdout)?;

    if let Some(path) = &args.json {
        let table = tree.code_table()?;
        let json = serde_json::to_string_pretty(&table)?;
        fs::write(path, json)?;
        if_tracing! {
            tracing::info!(event = "codes_exported", output = %path.display(), symbols = table.len(), "code table written");
        }
    }
    Ok(())
}
