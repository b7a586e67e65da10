use crate::cli::{Result, StatsArgs};
use crate::stats::CodeStats;

pub fn stats(args: StatsArgs) -> Result<()> {
    let (_, table, tree) = crate::cli::load(&args.input)?;
    let stats = CodeStats::measure(&table, &tree.code_table()?);

    println!("symbols: {}", stats.symbol_count);
    println!("input: {} bits ({} bytes)", stats.input_bits, stats.input_bits / 8);
    println!("encoded: {} bits", stats.encoded_bits);
    println!("ratio: {:.1}% (encoded/original)", stats.ratio() * 100.0);
    Ok(())
}
