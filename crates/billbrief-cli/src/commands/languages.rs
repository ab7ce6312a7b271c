//! Languages command - list supported translation/speech languages.

use clap::Args;
use console::style;

use billbrief_core::lang::LANGUAGES;

/// Arguments for the languages command.
#[derive(Args)]
pub struct LanguagesArgs {
    /// Print language codes only
    #[arg(long)]
    codes: bool,
}

pub async fn run(args: LanguagesArgs) -> anyhow::Result<()> {
    for (name, code) in LANGUAGES.iter() {
        if args.codes {
            println!("{code}");
        } else {
            println!("{}  {name}", style(code).cyan());
        }
    }
    Ok(())
}
