//! CLI argument definitions using clap derive macros.

use clap::Parser;

/// Summarize an academic paper with a two-pass critical reading.
///
/// Pass a paper URL (or any text containing one) as arguments, or pipe
/// text via stdin. Academic-publisher links are preferred over other URLs.
#[derive(Parser, Debug)]
#[command(name = "paper-summarizer")]
#[command(author, version, about)]
pub struct Args {
    /// Paper URL or free text containing one (read from stdin when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Vec<String>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Chat model used for both summary passes
    #[arg(short, long)]
    pub model: Option<String>,

    /// Print the extracted paper record as JSON instead of summarizing
    #[arg(long)]
    pub extract_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["paper-summarizer"]).unwrap();
        assert!(args.input.is_empty());
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        assert!(args.model.is_none());
        assert!(!args.extract_only);
    }

    #[test]
    fn test_cli_collects_free_text_input() {
        let args =
            Args::try_parse_from(["paper-summarizer", "read", "https://arxiv.org/abs/1"]).unwrap();
        assert_eq!(args.input, vec!["read", "https://arxiv.org/abs/1"]);
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["paper-summarizer", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_model_and_extract_only() {
        let args = Args::try_parse_from([
            "paper-summarizer",
            "--model",
            "gpt-4o-mini",
            "--extract-only",
            "https://example.com/p.pdf",
        ])
        .unwrap();
        assert_eq!(args.model.as_deref(), Some("gpt-4o-mini"));
        assert!(args.extract_only);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let err = Args::try_parse_from(["paper-summarizer", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let err = Args::try_parse_from(["paper-summarizer", "--invalid-flag"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
