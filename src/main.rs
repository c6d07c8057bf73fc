use clap::Parser;

use notice_guard::cli::Cli;
use notice_guard::commands::run_check;

fn main() {
    let cli = Cli::parse();
    let exit_code = run_check(&cli.files, cli.verbose);
    std::process::exit(exit_code);
}
