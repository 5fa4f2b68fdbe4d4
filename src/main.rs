use std::fs::File;
use std::io::Write;
use std::process::exit;

use cwidth::cmdline::{Cli, Format};
use cwidth::error::{CompileError, ErrorCollector};
use cwidth::{header, limits, resolve};

fn main() {
    let cli = Cli::parse();
    let mut ec = ErrorCollector::new();

    let mut lim = match limits::target(cli.get_target()) {
        Some(lim) => lim,
        None => {
            let _ = ec.record_error(CompileError::UnknownTarget(cli.get_target().to_string()));
            ec.print_issues();
            exit(1);
        }
    };

    if lim.define_all(&cli.define, &mut ec).is_err() {
        ec.print_issues();
        exit(1);
    }

    if cli.verbose {
        println!("========== LIMITS ({}) ===========", cli.get_target());
        print!("{}", lim);
        println!("========== RESOLVE ===========");
    }

    let r = resolve::resolve(&lim, &mut ec);
    ec.print_issues();
    let r = match r {
        Ok(r) => r,
        Err(()) => exit(1),
    };

    let text = match cli.get_format() {
        Format::Text => r.to_string(),
        Format::Header => header::render(&r),
        Format::Json => match serde_json::to_string_pretty(&r) {
            Ok(json) => json + "\n",
            Err(e) => {
                println!("Cannot serialize result: {}", e);
                exit(1);
            }
        },
    };

    match cli.output {
        Some(path) => {
            if let Err(e) = File::create(&path).and_then(|mut f| write!(f, "{}", text)) {
                println!("Cannot open {} for writing: {}", path.display(), e);
                exit(1);
            }
        }
        None => print!("{}", text),
    }
}
