//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without running an interactive session.

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "cgpa")]
struct Args {
    #[arg(long, global = true)]
    json: bool,

    #[arg(long, global = true)]
    details: bool,

    #[arg(long, global = true)]
    no_color: bool,

    #[arg(long, global = true, value_enum, default_value = "non-negative")]
    credit_policy: CreditPolicyArg,

    #[arg(long, global = true, default_value_t = 3)]
    max_attempts: u32,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    Calculate,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum CreditPolicyArg {
    NonNegative,
    Any,
}

#[test]
fn test_parse_no_args() {
    let args = Args::try_parse_from(["cgpa"]).unwrap();
    assert!(args.command.is_none());
    assert!(!args.json);
    assert!(!args.details);
    assert!(!args.no_color);
    assert_eq!(args.credit_policy, CreditPolicyArg::NonNegative);
    assert_eq!(args.max_attempts, 3);
}

#[test]
fn test_parse_calculate() {
    let args = Args::try_parse_from(["cgpa", "calculate"]).unwrap();
    assert!(matches!(args.command, Some(Command::Calculate)));
}

#[test]
fn test_parse_scale_with_json() {
    let args = Args::try_parse_from(["cgpa", "scale", "--json"]).unwrap();
    assert!(matches!(args.command, Some(Command::Scale)));
    assert!(args.json);
}

#[test]
fn test_global_flags_before_subcommand() {
    let args = Args::try_parse_from(["cgpa", "--details", "--no-color", "calculate"]).unwrap();
    assert!(matches!(args.command, Some(Command::Calculate)));
    assert!(args.details);
    assert!(args.no_color);
}

#[test]
fn test_parse_credit_policy() {
    let args = Args::try_parse_from(["cgpa", "--credit-policy", "any"]).unwrap();
    assert_eq!(args.credit_policy, CreditPolicyArg::Any);
}

#[test]
fn test_parse_max_attempts() {
    let args = Args::try_parse_from(["cgpa", "calculate", "--max-attempts", "10"]).unwrap();
    assert_eq!(args.max_attempts, 10);
}

#[test]
fn test_invalid_credit_policy_fails() {
    let result = Args::try_parse_from(["cgpa", "--credit-policy", "positive"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_max_attempts_fails() {
    let result = Args::try_parse_from(["cgpa", "--max-attempts", "-1"]);
    assert!(result.is_err());
}

#[test]
fn test_unknown_subcommand_fails() {
    let result = Args::try_parse_from(["cgpa", "average"]);
    assert!(result.is_err());
}
