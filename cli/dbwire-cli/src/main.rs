mod scaffold;

use clap::Parser;

#[derive(Parser)]
#[command(name = "dbwire")]
#[command(about = "Writes the lib/db.ts database helper into the current project", long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = scaffold::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
