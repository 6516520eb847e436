use std::process;

fn main() {
    process::exit(ember_harness::cli::run());
}
