use clap::Parser;
use std::path::Path;

mod rules;
mod services;

use services::{output, storage};

#[derive(Parser, Debug)]
#[command(
    name = "firefix",
    version,
    about = "Bootstrap development-mode Firestore security rules"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    print!("{}", output::render_report());

    storage::write_rules(Path::new(rules::RULES_FILE))?;
    print!("{}", output::confirmation(rules::RULES_FILE));

    storage::audit_emit(&storage::EmitRecord {
        file: rules::RULES_FILE.to_string(),
        bytes: rules::DEV_RULES.len(),
        rules_version: rules::RULES_VERSION.to_string(),
    });

    Ok(())
}
