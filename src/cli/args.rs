use clap::Parser;

/// Command-line arguments for sparseclone
#[derive(Parser, Debug, Clone)]
#[command(name = "sparseclone")]
#[command(about = "Clone a git repo with sparse checkout in one step")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Git provider: github, gitlab, codeberg [default: github]
    #[arg(long, value_name = "PROVIDER", env = "SPARSECLONE_PROVIDER")]
    pub provider: Option<String>,

    /// Git username or org
    #[arg(
        short = 'u',
        long = "username",
        value_name = "USER",
        env = "SPARSECLONE_USERNAME"
    )]
    pub username: String,

    /// Repository name
    #[arg(
        short = 'r',
        long = "repository",
        value_name = "REPO",
        env = "SPARSECLONE_REPOSITORY"
    )]
    pub repository: String,

    /// Output directory. Defaults to repo name
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        env = "SPARSECLONE_OUTPUT_DIR"
    )]
    pub output_dir: Option<String>,

    /// Branch name to checkout [default: main]
    #[arg(
        short = 'b',
        long = "checkout-branch",
        value_name = "BRANCH",
        env = "SPARSECLONE_BRANCH"
    )]
    pub checkout_branch: Option<String>,

    /// Paths to sparse-checkout (repeatable)
    #[arg(
        short = 'p',
        long = "checkout-path",
        value_name = "PATH",
        required = true
    )]
    pub checkout_paths: Vec<String>,

    /// Clone protocol: ssh or https [default: ssh]
    #[arg(long, value_name = "PROTOCOL", env = "SPARSECLONE_PROTOCOL")]
    pub protocol: Option<String>,

    /// Defaults file path (provider, protocol, branch)
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Print the planned git commands without executing them
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for the dry-run plan: shell or json
    #[arg(
        long = "output-format",
        value_name = "FORMAT",
        default_value = "shell",
        requires = "dry_run"
    )]
    pub output_format: String,

    /// Enable verbose logging output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "These are unit tests")]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(core::iter::once("sparseclone").chain(args.iter().copied()))
    }

    #[test]
    fn parses_short_flags_and_repeated_paths() {
        let args = parse(&["-u", "alice", "-r", "proj", "-p", "src", "-p", "docs", "-b", "dev"])
            .unwrap();

        assert_eq!(args.username, "alice");
        assert_eq!(args.repository, "proj");
        assert_eq!(args.checkout_paths, vec!["src", "docs"]);
        assert_eq!(args.checkout_branch.as_deref(), Some("dev"));
        assert_eq!(args.output_dir, None);
        assert!(!args.dry_run);
    }

    #[test]
    fn parses_long_flags() {
        let args = parse(&[
            "--provider",
            "gitlab",
            "--username",
            "bob",
            "--repository",
            "tool.git",
            "--output-dir",
            "out",
            "--checkout-path",
            "lib",
            "--protocol",
            "https",
        ])
        .unwrap();

        assert_eq!(args.provider.as_deref(), Some("gitlab"));
        assert_eq!(args.protocol.as_deref(), Some("https"));
        assert_eq!(args.output_dir.as_deref(), Some("out"));
    }

    #[test]
    fn checkout_path_is_required() {
        let err = parse(&["-u", "alice", "-r", "proj"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn output_format_requires_dry_run() {
        parse(&["-u", "a", "-r", "b", "-p", "c", "--output-format", "json"]).unwrap_err();
        let args = parse(&[
            "-u",
            "a",
            "-r",
            "b",
            "-p",
            "c",
            "--dry-run",
            "--output-format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.output_format, "json");
    }

    #[test]
    fn verbosity_selects_log_level() {
        assert_eq!(parse(&["-u", "a", "-r", "b", "-p", "c"]).unwrap().log_level(), "info");
        assert_eq!(parse(&["-u", "a", "-r", "b", "-p", "c", "-v"]).unwrap().log_level(), "debug");
        assert_eq!(parse(&["-u", "a", "-r", "b", "-p", "c", "-q"]).unwrap().log_level(), "error");
        parse(&["-u", "a", "-r", "b", "-p", "c", "-q", "-v"]).unwrap_err();
    }
}
