use std::process;

fn main() {
    process::exit(crucible::cli::run());
}
