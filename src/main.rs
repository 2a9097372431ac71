use clap::Parser;
use entity_forms::application::grouper::ErrorsProcessor;
use entity_forms::domain::validation::BindStatus;
use entity_forms::interfaces::csv::field_error_reader::FieldErrorReader;
use entity_forms::interfaces::json::form_loader;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Form definition JSON file
    form: PathBuf,

    /// Field errors CSV file
    errors: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "entity_forms=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let form_file = File::open(cli.form).into_diagnostic()?;
    let form = form_loader::load_form(form_file).into_diagnostic()?;

    // Collect field errors, skipping unreadable records
    let mut bind_status = BindStatus::new();
    let errors_file = File::open(cli.errors).into_diagnostic()?;
    let reader = FieldErrorReader::new(errors_file);
    for err_result in reader.field_errors() {
        match err_result {
            Ok(field_error) => bind_status.field_errors.push(field_error),
            Err(e) => {
                eprintln!("Error reading field error: {}", e);
            }
        }
    }

    let processor = ErrorsProcessor::new();
    if let Some(local_variables) = processor.process(&form, &bind_status) {
        let rendered = serde_json::to_string_pretty(&local_variables).into_diagnostic()?;
        println!("{rendered}");
    }

    Ok(())
}
