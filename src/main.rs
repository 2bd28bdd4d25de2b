use std::io;

use anyhow::Result;
use clap::Parser;

use ynab_ledger::cli::{handle_convert_command, ConvertArgs, Prompter};
use ynab_ledger::config::{paths::LedgerPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "ynab2ledger",
    version,
    about = "Convert a YNAB register export to a ledger file",
    long_about = "ynab2ledger converts the register CSV exported by YNAB 4 into a \
                  plain-text double-entry ledger. Split transactions are reassembled, \
                  transfers are written once, and amounts are read and written in the \
                  export's culture."
)]
struct Cli {
    #[command(flatten)]
    convert: ConvertArgs,

    /// Show current configuration and paths, then exit
    #[arg(long)]
    show_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if cli.show_config {
        println!("ynab2ledger Configuration");
        println!("=========================");
        println!("Config directory: {}", paths.config_dir().display());
        println!("Settings file:    {}", paths.settings_file().display());
        println!("Accounts file:    {}", paths.accounts_file().display());
        println!();
        println!("Settings:");
        println!("  Culture:     {}", settings.culture);
        println!("  Delimiter:   {:?}", settings.delimiter);
        println!("  Use clear:   {}", settings.use_clear);
        println!("  Output file: {}", settings.output_file);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    handle_convert_command(&cli.convert, &paths, &settings, &mut prompter)?;

    Ok(())
}
