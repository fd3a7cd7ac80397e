extern crate clap;
extern crate pathflat;

mod commands;
mod flatten;

use clap::*;
use commands::*;
use flatten::FlattenError;
use pathflat::math::{vector, Vector};
use pathflat::path::ParserOptions;
use pathflat::FlattenOptions;

use std::fs::File;
use std::result::Result;
use std::io::prelude::*;
use std::io::{stdout, BufReader};

fn main() {
    env_logger::init();

    let matches = App::new("pathflat command-line interface")
        .version("0.1")
        .author("Nicolas Silva <nical@fastmail.com>")
        .about("SVG path flattener")
        .subcommand(SubCommand::with_name("flatten")
            .about("Flattens paths into line segments")
            .arg(Arg::with_name("SAMPLES")
                .short("s")
                .long("samples")
                .help("Sets the number of points sampled along each curve (20 by default)")
                .value_name("SAMPLES")
                .takes_value(true)
            )
            .arg(Arg::with_name("TRANSLATE")
                .long("translate")
                .help("Translates every path by X,Y")
                .value_name("X,Y")
                .takes_value(true)
                .allow_hyphen_values(true)
            )
            .arg(Arg::with_name("STRICT")
                .long("strict")
                .help("Fails on malformed numbers, unsupported commands and missing arguments")
            )
            .arg(Arg::with_name("COUNT")
                .short("c")
                .long("count")
                .help("Prints the number of paths and segments")
            )
        )
        .arg(Arg::with_name("PATH")
            .value_name("PATH")
            .help("An SVG path")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("INPUT")
            .help("Sets the input file to use, one path per line")
            .short("i")
            .long("input")
            .value_name("FILE")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("OUTPUT")
            .help("Sets the output file to use")
            .value_name("FILE")
            .short("o")
            .long("output")
            .takes_value(true)
            .required(false)
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), FlattenError> {
    let mut input = Vec::new();
    if let Some(path) = matches.value_of("PATH") {
        input.push(path.to_string());
    }

    if let Some(input_file) = matches.value_of("INPUT") {
        let file = File::open(input_file)?;
        for line in BufReader::new(file).lines() {
            let line = line?;
            if !line.trim().is_empty() {
                input.push(line);
            }
        }
    }

    let mut output: Box<dyn Write> = Box::new(stdout());
    if let Some(output_file) = matches.value_of("OUTPUT") {
        output = Box::new(File::create(output_file)?);
    }

    if let Some(flatten_matches) = matches.subcommand_matches("flatten") {
        let cmd = FlattenCmd {
            input,
            output,
            options: FlattenOptions::sample_count(get_sample_count(flatten_matches)?),
            parser: ParserOptions::DEFAULT.with_strict(flatten_matches.is_present("STRICT")),
            offset: get_translation(flatten_matches)?,
            count: flatten_matches.is_present("COUNT"),
        };

        flatten::flatten(cmd)?;
    }

    Ok(())
}

fn get_sample_count(matches: &ArgMatches) -> Result<usize, FlattenError> {
    match matches.value_of("SAMPLES") {
        Some(samples) => samples
            .parse()
            .map_err(|_| FlattenError::InvalidArgument(format!("--samples {}", samples))),
        None => Ok(FlattenOptions::DEFAULT_SAMPLE_COUNT),
    }
}

fn get_translation(matches: &ArgMatches) -> Result<Option<Vector>, FlattenError> {
    let translation = match matches.value_of("TRANSLATE") {
        Some(translation) => translation,
        None => return Ok(None),
    };

    let invalid = || FlattenError::InvalidArgument(format!("--translate {}", translation));
    let mut components = translation.split(',').map(|v| v.trim().parse::<f64>());
    match (components.next(), components.next(), components.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => Ok(Some(vector(x, y))),
        _ => Err(invalid()),
    }
}
