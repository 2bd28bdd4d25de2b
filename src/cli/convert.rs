//! CLI command handler for converting an export
//!
//! Reads the export, completes the account classification, converts and
//! writes the ledger file. Anything not given on the command line is taken
//! from the settings or asked for.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use log::{debug, info};

use super::prompt::Prompter;
use crate::config::{LedgerPaths, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::import::{read_rows, required_account_names};
use crate::models::{AccountTypes, Culture};
use crate::services::{convert, ConvertOptions};

/// Arguments of a conversion run
#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    /// YNAB-exported register CSV file (asked for when omitted)
    pub input: Option<PathBuf>,

    /// Ledger file to write [default: from settings, register.dat]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Culture of the export's amounts and dates, e.g. en-US, fr-FR, mk
    #[arg(short, long)]
    pub culture: Option<String>,

    /// CSV delimiter; use `tab` or `\t` for tabs
    #[arg(short, long, value_parser = parse_delimiter)]
    pub delimiter: Option<char>,

    /// Leave out the cleared marker (*/!) in transaction headers
    #[arg(long)]
    pub no_clear: bool,

    /// YAML file classifying accounts [default: accounts.yaml in the config directory]
    #[arg(short, long)]
    pub accounts: Option<PathBuf>,

    /// Write the completed account classification back to the accounts file
    #[arg(long)]
    pub save_accounts: bool,

    /// Replace an existing output file without asking
    #[arg(short, long)]
    pub force: bool,
}

/// Parse a delimiter argument
pub fn parse_delimiter(s: &str) -> Result<char, String> {
    match s {
        "tab" | "\\t" => Ok('\t'),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(format!("expected a single character, got '{}'", s)),
            }
        }
    }
}

/// Handle a conversion run
pub fn handle_convert_command<R: BufRead, W: Write>(
    args: &ConvertArgs,
    paths: &LedgerPaths,
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> LedgerResult<()> {
    let input = match &args.input {
        Some(input) => input.clone(),
        None => prompter
            .ask("YNAB-exported CSV file name:")?
            .filter(|answer| !answer.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| LedgerError::Validation("No input file given".into()))?,
    };
    if !input.is_file() {
        return Err(LedgerError::Import(format!(
            "File not found: {}",
            input.display()
        )));
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.output_file));
    if output.exists()
        && !args.force
        && !prompter.confirm("The output file already exists. Do you want to replace it?")?
    {
        println!("Leaving '{}' unchanged.", output.display());
        return Ok(());
    }

    let culture = match &args.culture {
        Some(name) => Culture::lookup(name)?,
        None => settings.culture()?,
    };
    let options = ConvertOptions {
        use_clear: settings.use_clear && !args.no_clear,
        culture,
    };
    let delimiter = args.delimiter.unwrap_or(settings.delimiter);
    debug!(
        "Converting '{}' with culture {} and delimiter {:?}",
        input.display(),
        culture,
        delimiter
    );

    let file = File::open(&input)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", input.display(), e)))?;
    let rows = read_rows(BufReader::new(file), delimiter, &culture)?;

    let accounts_file = args
        .accounts
        .clone()
        .unwrap_or_else(|| paths.accounts_file());
    let account_types = resolve_account_types(&accounts_file, &required_account_names(&rows), prompter)?;
    if args.save_accounts {
        account_types.save(&accounts_file)?;
        info!("Saved {} account types", account_types.len());
        println!("Saved account types to '{}'", accounts_file.display());
    }

    let conversion = convert(rows, &account_types, &options)?;
    std::fs::write(&output, &conversion.ledger)
        .map_err(|e| LedgerError::Io(format!("Failed to write {}: {}", output.display(), e)))?;

    println!(
        "Wrote {} transactions to '{}'",
        conversion.transaction_count,
        output.display()
    );
    if !conversion.warnings.is_empty() {
        println!("  Warnings:    {}", conversion.warnings.len());
        for warning in &conversion.warnings {
            println!("    {}", warning);
        }
    }

    Ok(())
}

/// Load the saved classification and ask for every account still missing
fn resolve_account_types<R: BufRead, W: Write>(
    accounts_file: &Path,
    required: &[String],
    prompter: &mut Prompter<R, W>,
) -> LedgerResult<AccountTypes> {
    let mut account_types = if accounts_file.exists() {
        AccountTypes::load(accounts_file)?
    } else {
        AccountTypes::new()
    };

    let missing: Vec<String> = account_types
        .missing(required)
        .into_iter()
        .map(str::to_string)
        .collect();
    for account in missing {
        let account_type = prompter.account_type(&account)?;
        account_types.insert(account, account_type);
    }

    Ok(account_types)
}
