//! Process-level error handling and argument parsing.

/// Report a fatal error and exit with status 1.
pub fn handle_error(error: anyhow::Error) -> ! {
    eprintln!();
    eprintln!("Error building font:");
    eprintln!("{error:#}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse and validate the command line.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::Parser;
    let args = crate::core::cli::CliArgs::parse();
    if let Err(message) = args.validate() {
        handle_error(anyhow::anyhow!(message));
    }
    args
}
