use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Count the contigs in a FASTA assembly", long_about = None)]
pub struct Cli {
    /// a FASTA-formatted assembly
    #[arg(value_name = "FILE", required = true)]
    fasta: String,

    /// write the report to this location (default is stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,
}

impl Cli {
    pub fn get_input(&self) -> String {
        self.fasta.clone()
    }

    pub fn get_output(&self) -> Option<String> {
        self.output.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults_to_stdout() {
        let args = Cli::parse_from(["contig-count", "assembly.fasta"]);
        assert_eq!(args.get_input(), "assembly.fasta");
        assert_eq!(args.get_output(), None);
    }

    #[test]
    fn output_flag_sets_report_path() {
        let args = Cli::parse_from(["contig-count", "assembly.fasta", "-o", "report.txt"]);
        assert_eq!(args.get_output(), Some("report.txt".to_string()));

        let args = Cli::parse_from(["contig-count", "--output", "report.txt", "assembly.fasta"]);
        assert_eq!(args.get_output(), Some("report.txt".to_string()));
    }

    #[test]
    fn fasta_is_required() {
        assert!(Cli::try_parse_from(["contig-count"]).is_err());
    }
}
