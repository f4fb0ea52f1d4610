use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "shutdown")]
#[command(about = "Acknowledges SIGINT/SIGTERM, then exits with status 0 after a fixed delay")]
pub struct ShutdownCli {
    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = ShutdownCli::try_parse_from(["shutdown"]).unwrap();
        assert!(!cli.verbose);

        let cli = ShutdownCli::try_parse_from(["shutdown", "-v"]).unwrap();
        assert!(cli.verbose);

        assert!(ShutdownCli::try_parse_from(["shutdown", "--delay", "3"]).is_err());
    }
}
