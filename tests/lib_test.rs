//! Library integration tests.

use validate_setup::ValidateError;

#[test]
fn error_types_are_public() {
    let err = ValidateError::ConfigValidationError {
        message: "test".into(),
    };
    assert!(err.to_string().contains("test"));
    assert!(err.is_config_error());
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> validate_setup::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use validate_setup::cli::{Cli, Commands};

    let cli = Cli::parse_from(["validate-setup", "check", "--json"]);

    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn standard_checks_run_against_mocks() {
    use validate_setup::checks::{CheckContext, CheckRunner};
    use validate_setup::config::SetupConfig;
    use validate_setup::shell::{MockRunner, ProbeOutput};
    use validate_setup::ui::MockUI;

    let temp = tempfile::TempDir::new().unwrap();
    let mut config = SetupConfig::default();
    config.interpreter.command = Some("python3".to_string());
    let runner = MockRunner::new()
        .respond("python3 --version", ProbeOutput::success("Python 3.13.0\n"))
        .respond("docker ps", ProbeOutput::failure(1, "Cannot connect to the Docker daemon"));
    let ctx = CheckContext::new(temp.path(), &config, &runner);
    let mut ui = MockUI::new();

    let summary = CheckRunner::standard(&config).run_all(&ctx, &mut ui);

    assert_eq!(summary.passed(), 0);
    assert_eq!(
        summary.failed_labels(),
        vec![
            "Python Version",
            "Required Packages",
            "Environment Variables",
            "Docker & Jaeger"
        ]
    );
    assert!(ui.has_error("Docker is not running"));
    assert!(ui.has_hint("Required: Python 3.11 or 3.12"));
}
