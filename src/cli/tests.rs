#[cfg(test)]
mod cli_tests {
    use crate::cli::parser::*;
    use crate::core::sweep::Mode;
    use clap::error::ErrorKind;
    use clap::Parser;

    #[test]
    fn test_defaults_to_dry_run() {
        let cli = Cli::try_parse_from(["branchsweep"]).unwrap();
        assert_eq!(cli.mode(), Mode::DryRun);
        assert!(!cli.force);
    }

    #[test]
    fn test_explicit_dry_run() {
        let cli = Cli::try_parse_from(["branchsweep", "--dry-run"]).unwrap();
        assert_eq!(cli.mode(), Mode::DryRun);
    }

    #[test]
    fn test_execute_with_force() {
        let cli = Cli::try_parse_from(["branchsweep", "--execute", "--force"]).unwrap();
        let policy = cli.policy();
        assert_eq!(policy.mode, Mode::Execute);
        assert!(policy.force);
    }

    #[test]
    fn test_force_alone_stays_dry_run() {
        let cli = Cli::try_parse_from(["branchsweep", "--force"]).unwrap();
        assert_eq!(cli.mode(), Mode::DryRun);
        assert!(cli.force);
    }

    #[test]
    fn test_dry_run_conflicts_with_execute() {
        let err = Cli::try_parse_from(["branchsweep", "--dry-run", "--execute"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        let err = Cli::try_parse_from(["branchsweep", "--prune-everything"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_help_is_not_an_error_stream() {
        for flag in ["--help", "-h"] {
            let err = Cli::try_parse_from(["branchsweep", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
            assert!(!err.use_stderr());
        }
    }
}
