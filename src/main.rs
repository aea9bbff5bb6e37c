use clap::Parser;

use git_hub::cli::{orchestration, Cli};
use git_hub::{logging, ui};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    if let Err(e) = orchestration::run(cli) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
