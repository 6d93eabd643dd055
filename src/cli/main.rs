#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::path::PathBuf;

use websat::{context::Context, reports::Report, types::err};

mod misc;
mod parse;

use misc::{examine_parser_info, load_dimacs, print_stats};

fn main() {
    #[cfg(feature = "logger")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = match parse::config::config_from_args(&matches) {
        Ok(config) => config,
        Err(err::ConfigError::OutOfBounds(name)) => {
            println!("c The value given for {name} is out of bounds");
            std::process::exit(1);
        }
    };

    let show_model = matches!(matches.try_get_one::<bool>("model"), Ok(Some(true)));
    let show_stats = matches!(matches.try_get_one::<bool>("stats"), Ok(Some(true)));

    let Ok(Some(path)) = matches.try_get_one::<PathBuf>("path") else {
        println!("c Path to CNF required");
        std::process::exit(1);
    };

    println!("c Reading DIMACS file from {path:?}");

    let mut the_context = Context::from_config(config);

    match load_dimacs(&mut the_context, path) {
        Ok(info) => examine_parser_info(&info),
        Err(e) => {
            println!("c Error loading DIMACS: {e}");
            std::process::exit(1);
        }
    }

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(err::ErrorKind::ResourceExhausted(resource)) => {
            println!("c Solve stopped: {resource}");
            Report::Unknown
        }
        Err(e) => {
            println!("c Context error: {e}");
            std::process::exit(1);
        }
    };

    if show_stats {
        print_stats(&the_context);
    }

    match report {
        Report::Satisfiable => {
            println!("s SATISFIABLE");
            if show_model {
                if let Ok(model) = the_context.model() {
                    let mut line = String::from("v");
                    for literal in model.true_literals() {
                        line.push_str(&format!(" {literal}"));
                    }
                    println!("{line} 0");
                }
            }
            std::process::exit(10)
        }

        Report::Unsatisfiable => {
            println!("s UNSATISFIABLE");
            std::process::exit(20)
        }

        Report::Unknown => {
            println!("s UNKNOWN");
            std::process::exit(0)
        }
    }
}
