use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn keywords_accepts_country_and_trailing_json_flag() {
    let cli = Cli::try_parse_from(["seodash-cli", "keywords", "rust web", "--country", "gb", "--json"]).unwrap();
    assert!(cli.json);
    match cli.command {
        Command::Keywords { keyword, country } => {
            assert_eq!(keyword, "rust web");
            assert_eq!(country.as_deref(), Some("gb"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn checkout_requires_plan_and_email() {
    assert!(Cli::try_parse_from(["seodash-cli", "checkout", "--plan", "starter"]).is_err());
    let cli = Cli::try_parse_from(["seodash-cli", "checkout", "--plan", "starter", "--email", "a@b.co"]).unwrap();
    assert!(matches!(cli.command, Command::Checkout { .. }));
}

#[test]
fn base_url_flag_overrides_default() {
    let cli = Cli::try_parse_from(["seodash-cli", "--base-url", "http://seo.test", "history"]).unwrap();
    assert_eq!(cli.base_url, "http://seo.test");
}

#[test]
fn blank_input_is_rejected_before_any_request() {
    let err = required(Operation::Audit, "   ").unwrap_err();
    assert_eq!(err, ApiError::InvalidInput(Operation::Audit));
}

#[test]
fn connection_flags_are_accepted_after_the_subcommand() {
    let cli = Cli::try_parse_from([
        "seodash-cli",
        "domain",
        "example.com",
        "--api-key",
        "k",
        "--base-url",
        "http://seo.test",
    ])
    .unwrap();
    assert_eq!(cli.api_key.as_deref(), Some("k"));
    assert_eq!(cli.base_url, "http://seo.test");
    assert!(matches!(cli.command, Command::Domain { .. }));
}

#[test]
fn error_line_uses_display_text_not_debug() {
    let unauthorized = CliError::Api(ApiError::Unauthorized(Operation::Analysis));
    assert_eq!(error_line(&unauthorized), "error: Invalid credential");

    let quota = CliError::Api(ApiError::QuotaExceeded { op: Operation::Research, detail: None });
    assert_eq!(error_line(&quota), "error: Quota exceeded");

    let detail = CliError::Api(ApiError::Request {
        op: Operation::Checkout,
        status: 400,
        detail: Some("Invalid plan: gold".to_owned()),
    });
    assert_eq!(error_line(&detail), "error: Invalid plan: gold");
}

#[test]
fn keyword_country_is_sent_lowercase() {
    let cli = Cli::try_parse_from(["seodash-cli", "keywords", "rust", "--country", "GB"]).unwrap();
    let Command::Keywords { keyword, country } = cli.command else {
        panic!("expected keywords command");
    };
    let req = KeywordRequest::new(keyword, country.as_deref());
    assert_eq!(req.country.as_deref(), Some("gb"));
}
