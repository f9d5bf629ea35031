use clap::Parser;
use log::info;

mod cli;
mod contigs;

use anyhow::Result;
use cli::Cli;
use contigs::Contigs;

fn main() -> Result<()> {
    env_logger::init();

    // Parse CLI arguments
    let args = Cli::parse();
    let fasta_file = args.get_input();
    let output_location = args.get_output();

    // Count the records, then write the report.
    let report = Contigs::new(&fasta_file)?.count()?;
    info!("{fasta_file}: {} contigs", report.contig_count);
    report.write(output_location)?;
    Ok(())
}
