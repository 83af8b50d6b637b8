use std::env;
use std::error::Error;
use std::process;

use cashpoint::run;

fn main() {
    if let Err(err) = run_app() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run_app() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        return Err("Usage: cargo run -- requests.csv".into());
    }

    run(&args[1], std::io::stdout())
}
