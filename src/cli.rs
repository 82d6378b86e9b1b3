//! CLI argument parsing.

use std::io;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print usage information
pub fn print_usage() {
    eprintln!("Cloud Atlas - terminal field guide to the ten cloud types");
    eprintln!();
    eprintln!("Usage: cloud-atlas [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help     Show this help message");
    eprintln!("  -V, --version  Show version");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  Up/Down, j/k   Move selection");
    eprintln!("  Enter          Show cloud details");
    eprintln!("  Esc/Backspace  Back to the list");
    eprintln!("  q              Quit");
}

/// Parse CLI arguments. The atlas takes no configuration; only help and
/// version flags are accepted.
pub fn parse_args() -> io::Result<()> {
    for arg in std::env::args().skip(1) {
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("cloud-atlas {}", VERSION);
            std::process::exit(0);
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(())
}
