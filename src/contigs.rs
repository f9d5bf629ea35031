use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, Write},
};

use anyhow::{bail, Context, Result};
use log::debug;
use noodles::fasta;

// The Contigs struct holds the path of the assembly and a buffered
// reader over it. Records are only counted, never kept.
pub struct Contigs {
    fasta_file: String,
    reader: BufReader<File>,
}

impl Contigs {
    pub fn new(fasta_file: &str) -> Result<Self> {
        let file = File::open(fasta_file).with_context(|| format!("could not open {fasta_file}"))?;
        debug!("reading contigs from {fasta_file}");
        Ok(Self {
            fasta_file: fasta_file.to_string(),
            reader: BufReader::new(file),
        })
    }

    // Consume every record in the assembly and report how many there were.
    pub fn count(&mut self) -> Result<Report> {
        let contig_count = count_records(&mut self.reader)
            .with_context(|| format!("could not parse {}", self.fasta_file))?;
        Ok(Report { contig_count })
    }
}

/// Number of FASTA records readable from `reader`.
///
/// Blank lines ahead of the first header are skipped. A bare `>` header
/// still opens a record; only the `>` prefix is required.
pub fn count_records<R: BufRead>(reader: R) -> Result<usize> {
    let mut reader = fasta::Reader::new(reader);
    let mut definition = String::new();
    let mut sequence = Vec::new();
    let mut contig_count = 0;

    loop {
        definition.clear();
        if reader.read_definition(&mut definition)? == 0 {
            break;
        }

        // The sequence reader consumes everything up to the next header,
        // so blank lines only reach this point before the first record.
        if definition.trim().is_empty() {
            continue;
        }

        if !definition.starts_with('>') {
            bail!("invalid record {}: missing '>' header", contig_count + 1);
        }

        sequence.clear();
        reader
            .read_sequence(&mut sequence)
            .with_context(|| format!("invalid record {}", contig_count + 1))?;
        contig_count += 1;
    }

    Ok(contig_count)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub contig_count: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "contig_count: {}", self.contig_count)
    }
}

impl Report {
    // Write the report line to a file (truncating it) or to stdout.
    pub fn write(&self, output_location: Option<String>) -> Result<()> {
        let mut writer: Box<dyn Write> = match &output_location {
            Some(path) => Box::new(
                File::create(path).with_context(|| format!("could not create {path}"))?,
            ),
            None => Box::new(io::stdout().lock()),
        };
        debug!(
            "writing report to {}",
            output_location.as_deref().unwrap_or("stdout")
        );
        self.write_to(&mut writer)
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{self}")?;
        writer.flush()?;
        Ok(())
    }
}
