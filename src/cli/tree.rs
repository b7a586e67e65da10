use std::io;

use crate::cli::{Result, TreeArgs};
use crate::display;

pub fn tree(args: TreeArgs) -> Result<()> {
    let (_, _, tree) = crate::cli::load(&args.input)?;
    let mut stdout = io::stdout().lock();
    display::write_tree(&tree, &mut stdout)?;
    Ok(())
}
