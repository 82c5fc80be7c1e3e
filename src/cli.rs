use clap::Parser;
use std::path::PathBuf;

/// Remove dependency folders from your system
#[derive(Parser, Debug)]
#[command(name = "dep-sweeper")]
#[command(version, about)]
#[command(
    long_about = "Remove dependency folders from your system.\n\nScans PATH for node_modules \
                  directories and Python virtual environments (folders holding pyvenv.cfg), \
                  lets you pick which to delete, and removes them."
)]
pub struct Cli {
    /// Root directory to scan
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Go through the whole flow without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Also scan hidden directories
    #[arg(short, long)]
    pub all: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_path_only() {
        let cli = Cli::parse_from(["dep-sweeper", "/home"]);
        assert_eq!(cli.path, Some(PathBuf::from("/home")));
        assert!(!cli.dry_run);
        assert!(!cli.all);
    }

    #[test]
    fn parse_flags() {
        let cli = Cli::parse_from(["dep-sweeper", "--dry-run", "-a", "/projects"]);
        assert_eq!(cli.path, Some(PathBuf::from("/projects")));
        assert!(cli.dry_run);
        assert!(cli.all);
    }

    #[test]
    fn parse_long_all() {
        let cli = Cli::parse_from(["dep-sweeper", "/projects", "--all"]);
        assert!(cli.all);
    }

    #[test]
    fn path_is_optional() {
        let cli = Cli::parse_from(["dep-sweeper"]);
        assert!(cli.path.is_none());
    }
}
