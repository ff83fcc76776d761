use befund_core::*;
use clap::Parser;
use std::io;
use std::path::PathBuf;

mod clipboard;

#[derive(Parser)]
#[command(name = "befund")]
#[command(about = "Interaktive klinische Befund-Zusammenfassung aus CSV", long_about = None)]
struct Cli {
    /// Pfad zur CSV-Datei (default: organe.csv)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Nur aktive Einträge aus der CSV verwenden
    #[arg(long)]
    active: bool,

    /// Ergebnis NICHT in die Zwischenablage kopieren
    #[arg(long)]
    no_clipboard: bool,

    /// Alternative Konfigurationsdatei
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Settings after merging config file and command line
struct Settings {
    csv_path: PathBuf,
    active_only: bool,
    clipboard: bool,
}

impl Settings {
    fn resolve(cli: Cli, config: Config) -> Self {
        Self {
            csv_path: cli.csv.unwrap_or(config.catalog.csv_path),
            active_only: cli.active || config.catalog.active_only,
            clipboard: !cli.no_clipboard && config.output.clipboard,
        }
    }
}

fn main() -> Result<()> {
    // Keep stdout clean for prompts and the report
    befund_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let settings = Settings::resolve(cli, config);

    let catalog = Catalog::load_from_csv(&settings.csv_path)?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    prompter.show_menu(catalog.menu())?;
    let codes = prompter.ask_tokens(prompt::CODES_PROMPT)?;
    let items = select_items(&catalog, &codes, settings.active_only);
    prompter.show_options(&items)?;

    let affected = prompter.ask_numbers(prompt::AFFECTED_PROMPT)?;
    let classification = classify(&items, &affected, &mut prompter)?;
    let summary = classification.summary();

    println!("{}", summary);

    if settings.clipboard {
        match clipboard::copy_to_clipboard(&summary) {
            Ok(()) => println!("\nIn Zwischenablage kopiert (Strg+V zum Einfügen)."),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {}", e);
                eprintln!("Zwischenablage nicht verfügbar: {}", e);
            }
        }
    }

    Ok(())
}
