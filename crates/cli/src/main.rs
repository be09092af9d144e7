//! Stagehand CLI application entry point
//!
//! This is the minimal main entry point that delegates to the library.

use clap::Parser;

fn main() {
    // Configure miette for beautiful error reporting
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(false)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    // Parse CLI arguments
    let cli = stagehand::Cli::parse();

    // Run and display errors with miette formatting
    if let Err(e) = stagehand::run(cli) {
        // Usage is a soft error: plain text on stdout, distinct exit status
        if e.is_usage() {
            println!("{e}");
            std::process::exit(2);
        }

        let miette_error = miette::Report::msg(e.to_string());
        eprintln!("{miette_error:?}");
        std::process::exit(1);
    }
}
