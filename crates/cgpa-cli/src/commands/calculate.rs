//! Interactive calculation command.

use std::io::{self, Write};

use anyhow::Result;
use cgpa_core::{
    CalculatorConfig, ConsolePrompter, Session, format_report_console, format_subject_table,
};
use tracing::debug;

use crate::cli::OutputOptions;

/// Run an interactive session and print the result
pub fn run(config: CalculatorConfig, output: OutputOptions) -> Result<()> {
    debug!(
        "Starting session (credit policy: {}, max attempts: {})",
        config.credit_policy, config.max_attempts
    );

    // Keep stdout clean for the JSON document
    let prompt_out: Box<dyn Write> = if output.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let stdin = io::stdin();
    let mut prompter = ConsolePrompter::new(stdin.lock(), prompt_out).with_color(output.color);

    let report = Session::new(config).run(&mut prompter)?;

    if output.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!();
    println!("{}", format_report_console(&report, output.color));

    if output.details {
        println!();
        println!("{}", format_subject_table(&report));
    }

    Ok(())
}
