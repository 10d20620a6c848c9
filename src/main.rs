// vim: set ai et ts=4 sts=4 sw=4:
mod util;
mod grid;
mod rect;
mod field;
mod input;
mod render;
mod ui;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use clap::{App, Arg, value_t};
use log::{debug, error, info, warn};
use once_cell::sync::Lazy;

use self::field::{Field, DEFAULT_WIDTH, DEFAULT_HEIGHT};

static DEFAULT_WIDTH_STR: Lazy<String> = Lazy::new(|| DEFAULT_WIDTH.to_string());
static DEFAULT_HEIGHT_STR: Lazy<String> = Lazy::new(|| DEFAULT_HEIGHT.to_string());

pub struct Args {
    pub width: usize,
    pub height: usize,
    pub input_path: Option<PathBuf>,
    pub render_dir: Option<PathBuf>,
    pub preview: bool,
    pub verbosity: u64,
}

fn parse_args() -> Args {
    let matches = App::new("arable")
        .version("0.1.0")
        .about("Computes the areas of the fertile regions left on a plot of \
                land after a set of barren rectangles is removed.")
        .arg(Arg::with_name("width")
             .short("W").long("width")
             .takes_value(true)
             .default_value(DEFAULT_WIDTH_STR.as_str())
             .help("Field width in cells"))
        .arg(Arg::with_name("height")
             .short("H").long("height")
             .takes_value(true)
             .default_value(DEFAULT_HEIGHT_STR.as_str())
             .help("Field height in cells"))
        .arg(Arg::with_name("input")
             .short("i").long("input")
             .takes_value(true)
             .help("Read the barren rectangle sets from this file instead of stdin"))
        .arg(Arg::with_name("render-dir")
             .short("r").long("render-dir")
             .takes_value(true)
             .help("Write a PNG bitmap of each marked field into this directory"))
        .arg(Arg::with_name("preview")
             .short("p").long("preview")
             .help("Print a terminal sketch of each marked field"))
        .arg(Arg::with_name("verbose")
             .short("v")
             .multiple(true)
             .help("Increase log verbosity (-v: debug, -vv: trace)"))
        .get_matches();

    Args {
        width:      value_t!(matches, "width", usize).unwrap_or_else(|e| e.exit()),
        height:     value_t!(matches, "height", usize).unwrap_or_else(|e| e.exit()),
        input_path: matches.value_of("input").map(PathBuf::from),
        render_dir: matches.value_of("render-dir").map(PathBuf::from),
        preview:    matches.is_present("preview"),
        verbosity:  matches.occurrences_of("verbose"),
    }
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}][{}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
        .expect("Could not initialize logging");
}

fn read_input(path: &Option<PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None    => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

fn main() {
    let args = parse_args();
    init_logging(args.verbosity);

    // zero extent is a configuration error, fatal for the whole run
    if args.width == 0 || args.height == 0 {
        error!("field dimensions must be positive (got {}x{})", args.width, args.height);
        process::exit(2);
    }

    let raw = match read_input(&args.input_path) {
        Ok(raw) => raw,
        Err(e)  => {
            error!("could not read input: {}", e);
            process::exit(2);
        }
    };
    let cases = match input::parse_cases(&raw) {
        Ok(cases) => cases,
        Err(e)    => {
            error!("could not parse input: {}", e);
            process::exit(2);
        }
    };
    if cases.is_empty() {
        warn!("no rectangle sets found in input");
    }
    debug!("parsed {} test case(s)", cases.len());

    let mut failures = 0;
    for (n, rects) in cases.into_iter().enumerate() {
        let case = Field::new(args.width, args.height, rects);
        // each case gets its own fresh grid; a failing case is dropped
        // without affecting the ones after it
        let areas = match case.analyze() {
            Ok(areas) => areas,
            Err(e)    => {
                error!("case {}: {}", n + 1, e);
                failures += 1;
                continue;
            }
        };
        println!("{}", areas.iter()
                            .map(|a| a.to_string())
                            .collect::<Vec<_>>()
                            .join(" "));
        info!("case {}: {}, {} fertile region(s)", n + 1, case, areas.len());

        if args.preview || args.render_dir.is_some() {
            // rebuild the marked snapshot; analyze() consumed its own copy
            let marked = case.marked_grid().expect("case was already analyzed successfully");
            if args.preview {
                ui::print_preview(&marked);
            }
            if let Some(dir) = &args.render_dir {
                let path = dir.join(format!("case_{}.png", n + 1));
                if let Err(e) = render::save_bitmap(&marked, &path) {
                    warn!("case {}: could not write bitmap: {}", n + 1, e);
                }
            }
        }
    }

    if failures > 0 {
        process::exit(1);
    }
}
