//! pmergeme: sort positive integers with merge-insertion, timed per container.

use pmerge_cli::colors::Palette;
use pmerge_cli::{logging, Args};

fn main() {
    let args = match Args::try_parse_checked(std::env::args_os()) {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };
    logging::init(args.verbose);

    match pmerge_cli::run(&args) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            let palette = Palette::for_stderr(!args.no_color);
            eprintln!("{} {}", palette.red("error:"), e);
            std::process::exit(1);
        }
    }
}
