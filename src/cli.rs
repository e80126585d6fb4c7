use clap::Parser;

/// Terminal Pokédex: look up creatures in the public catalog by name.
///
/// Without arguments this starts the interactive search screen. With a
/// NAME it performs a single lookup and prints the record to stdout.
#[derive(Debug, Parser)]
#[command(name = "dexterm", version, about)]
pub struct Cli {
    /// Look up this name once and exit instead of starting the TUI.
    pub name: Option<String>,

    /// Print the one-shot result as JSON.
    #[arg(long, requires = "name")]
    pub json: bool,

    /// Override the catalog base URL from the config file.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the quiet interval between typing and lookup, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,
}
