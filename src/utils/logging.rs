/// Verbose diagnostics go to stderr so stdout stays clean for piped output
pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        eprintln!("Verbose: {msg}");
    }
}
