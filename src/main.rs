use clap::Parser;
use std::process;
use survey_reporter::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error.detailed_message());
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Survey Reporter - Training Survey Satisfaction Reports");
    println!("======================================================");
    println!();
    println!("Turn line-delimited KEY=VALUE survey exports into a report of");
    println!("category averages and the Net Promoter Score.");
    println!();
    println!("USAGE:");
    println!("    survey-reporter <COMMAND> [PATHS]... [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    report      Aggregate survey exports into a report (main command)");
    println!("    convert     Print the parsed key/value records as JSON");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Report on a single export:");
    println!("    survey-reporter report surveys.txt");
    println!();
    println!("    # Report on every .txt export in a directory, with comments:");
    println!("    survey-reporter report exports/ --comments");
    println!();
    println!("    # Read stdin and emit JSON:");
    println!("    cat surveys.txt | survey-reporter report --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    survey-reporter <COMMAND> --help");
}
