use clap::Parser;

/// Command-line arguments for the program
#[derive(Parser, Debug)]
#[command(
    name = "ip6arpa",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate ip6.arpa reverse DNS names for IPv6 addresses and prefixes",
)]
pub struct CommandArgs {
    /// IPv6 address(es) with optional CIDR prefix length, e.g. '2001:db8::/48'
    #[arg(required_unless_present = "file", env = "IP6ARPA_TARGETS")]
    pub targets: Vec<String>,

    /// Path to a file containing one address per line
    #[arg(short, long, required = false, env = "IP6ARPA_FILE")]
    pub file: Option<String>,

    /// Path of output file to write JSON results to. Extension is optional.
    #[arg(long, required = false, env = "IP6ARPA_JSON")]
    pub json: Option<String>,

    /// Don't print results to the console, only write to the output file
    #[arg(short = 'Q', long, required = false, env = "IP6ARPA_QUIET")]
    pub quiet: bool,

    /// Print the canonical expansion of each address alongside its reverse name
    #[arg(short, long, default_value_t = false, env = "IP6ARPA_VERBOSE")]
    pub verbose: bool,
}

impl CommandArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.quiet && self.json.is_none() {
            return Err("The argument '--quiet' requires '--json <OUTPUT_FILE>'".to_string());
        }

        Ok(())
    }
}

/// Retrieves and validates the parsed command-line arguments
pub fn get_parsed_args() -> CommandArgs {
    let args = CommandArgs::parse();
    if let Err(e) = args.validate() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    args
}
