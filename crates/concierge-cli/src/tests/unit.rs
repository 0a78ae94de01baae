use std::ffi::OsString;
use std::process::ExitCode;

use concierge_config::{Config, DeliveryMode};
use rstest::{fixture, rstest};

use super::{StaticConfigLoader, run_cli};

#[fixture]
fn config() -> Config {
    Config {
        opening_balance: 100,
        flight_capacity: 1,
        ..Config::default()
    }
}

#[rstest]
fn single_command_prints_human_result(config: Config) {
    let loader = StaticConfigLoader::new(config);
    let outcome = run_cli(&loader, "--output human deposit 50", "");
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert_eq!(outcome.stdout, "deposit: 150\n");
    assert!(outcome.stderr.is_empty(), "stderr: {}", outcome.stderr);
}

#[rstest]
fn redirected_output_defaults_to_json(config: Config) {
    let loader = StaticConfigLoader::new(config);
    let outcome = run_cli(&loader, "withdraw 250", "");
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert_eq!(outcome.stdout, "{\"command\":\"withdraw\",\"result\":-150}\n");
}

#[rstest]
#[case("bookFlight 7", "error: 'bookFlight' is not a valid command\n")]
#[case(
    "deposit ten",
    "error: deposit does not have properly formatted arguments: argument 1 ('ten') is not a valid integer\n"
)]
#[case(
    "requestFlight 1",
    "error: requestFlight does not have properly formatted arguments: expected 2 argument(s), found 1\n"
)]
fn rejected_single_command_exits_with_one(
    config: Config,
    #[case] command: &str,
    #[case] message: &str,
) {
    let loader = StaticConfigLoader::new(config);
    let outcome = run_cli(&loader, command, "");
    assert_eq!(outcome.exit, ExitCode::from(1));
    assert!(outcome.stdout.is_empty());
    assert_eq!(outcome.stderr, message);
}

#[rstest]
fn negative_arguments_are_not_mistaken_for_flags(config: Config) {
    let loader = StaticConfigLoader::new(config);
    let outcome = run_cli(&loader, "--output human deposit -30", "");
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert_eq!(outcome.stdout, "deposit: 70\n");
}

#[rstest]
fn lists_commands_with_argument_kinds(config: Config) {
    let loader = StaticConfigLoader::new(config);
    let outcome = run_cli(&loader, "--list-commands", "");
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert_eq!(
        outcome.stdout,
        "requestFlight <integer> <integer>\ncheckFlight <integer>\ndeposit <integer>\nwithdraw <integer>\n"
    );
}

#[rstest]
#[case(DeliveryMode::Inline)]
#[case(DeliveryMode::Queued)]
fn interactive_session_runs_until_quit(mut config: Config, #[case] delivery: DeliveryMode) {
    config.delivery = delivery;
    let loader = StaticConfigLoader::new(config);
    let input = "deposit 10\n\n  withdraw 5  \nbogus\nrequestFlight 1 7\nrequestFlight 2 7\ncheckFlight 7\nquit\ndeposit 1\n";
    let outcome = run_cli(&loader, "--output human", input);
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert_eq!(
        outcome.stdout,
        "deposit: 110\nwithdraw: 105\nrequestFlight: true\nrequestFlight: false\ncheckFlight: false\n"
    );
    assert_eq!(outcome.stderr, "error: 'bogus' is not a valid command\n");
}

#[rstest]
fn interactive_session_ends_at_eof(config: Config) {
    let loader = StaticConfigLoader::new(config);
    let outcome = run_cli(&loader, "--output json", "checkFlight 3");
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert_eq!(outcome.stdout, "{\"command\":\"checkFlight\",\"result\":true}\n");
}

#[rstest]
fn help_word_lists_commands_in_session(config: Config) {
    let loader = StaticConfigLoader::new(config);
    let outcome = run_cli(&loader, "--output human", "help\n");
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert!(outcome.stdout.starts_with("requestFlight <integer> <integer>\n"));
    assert_eq!(outcome.stdout.lines().count(), 4);
}

#[rstest]
fn config_flags_reach_the_loader_only(config: Config) {
    let loader = StaticConfigLoader::new(config);
    let outcome = run_cli(
        &loader,
        "--delivery queued --log-filter=debug --output human deposit 1",
        "",
    );
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert_eq!(outcome.stdout, "deposit: 101\n");
    let seen: Vec<OsString> = ["concierge", "--delivery", "queued", "--log-filter=debug"]
        .into_iter()
        .map(OsString::from)
        .collect();
    assert_eq!(loader.seen(), seen);
}

#[test]
fn help_flag_prints_usage_and_succeeds() {
    let loader = StaticConfigLoader::default();
    let outcome = run_cli(&loader, "--help", "");
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert!(outcome.stdout.contains("Usage: concierge"));
    assert!(loader.seen().is_empty(), "help should not load configuration");
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let loader = StaticConfigLoader::default();
    let outcome = run_cli(&loader, "--output sideways deposit 1", "");
    assert_eq!(outcome.exit, ExitCode::from(2));
    assert!(outcome.stderr.contains("sideways"), "stderr: {}", outcome.stderr);
}
