// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
extern crate failure;
extern crate log;
extern crate mandelfill;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use log::info;
use mandelfill::{fill, Raster};
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_number<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const THREADS: &str = "threads";

fn args<'a>(default_threads: &'a str) -> ArgMatches<'a> {
    App::new("mandelfill")
        .version("0.1.0")
        .about("Renders the Mandelbrot set across a pool of worker threads")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; the format follows the extension"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("512x512")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse image size"))
                .help("Size of the raster, as ROWSxCOLUMNS"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value(default_threads)
                .validator(|s| validate_number::<usize>(&s, "Could not parse thread count"))
                .help("Number of worker threads"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let (height, width) = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<u16>(s, 'x'))
        .ok_or_else(|| failure::err_msg("Error parsing image size"))?;
    let workers = matches
        .value_of(THREADS)
        .and_then(|s| usize::from_str(s).ok())
        .ok_or_else(|| failure::err_msg("Error parsing thread count"))?;
    let output = matches
        .value_of(OUTPUT)
        .ok_or_else(|| failure::err_msg("No output file given"))?;

    let mut raster = Raster::allocate(height as usize, width as usize);
    let start = Instant::now();
    fill(&mut raster, workers)?;
    info!(
        "filled {}x{} with {} workers in {:?}",
        height,
        width,
        workers,
        start.elapsed()
    );

    raster.to_image().save(Path::new(output))?;
    info!("wrote {}", output);
    Ok(())
}

fn main() {
    env_logger::init();
    let default_threads = num_cpus::get().to_string();
    let matches = args(&default_threads);
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
