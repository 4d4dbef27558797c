use clap::Parser;
use clap::error::ErrorKind;
use form_semantics::cli::commands::cmd_annotate;
use form_semantics::cli::config::{Cli, load_config};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Help and version requests are not usage errors
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    let config = load_config(cli.config.as_deref());

    match cmd_annotate(&cli, &config) {
        Ok(output_path) => {
            println!("Semantic bundle written to: {}", output_path.display());
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(2);
        }
    }
}
