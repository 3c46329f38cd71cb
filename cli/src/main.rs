use std::process::exit;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut out = std::io::stdout();
    let mut err = std::io::stderr();
    exit(tally_cli::run(args, &mut out, &mut err));
}
