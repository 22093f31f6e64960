//! The `orrery` binary is intentionally thin: the presenter lives in `cli/`
//! and this file only invokes `cli::commands::run()` and handles process
//! termination.

mod cli;

fn main() {
    if let Err(e) = cli::commands::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
