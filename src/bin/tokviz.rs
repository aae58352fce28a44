use clap::{Arg, Command};
use color_eyre::eyre::Result;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;
use tokviz::{
    analyze, read_source_file, read_until_blank_line, render, save_analysis, visualize,
    write_report, SplitMode, TransitionDiagram, DEFAULT_DIAGRAM_FILE,
};

fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Command::new("tokviz")
        .version("1.0")
        .about("Classifies the tokens of a few lines of code and draws them as transitions of an automaton")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("Read the source lines from this file instead of standard input. Reading stops at the first empty line")
                .value_name("INPUT SOURCE FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Where to write the transition diagram in DOT syntax")
                .value_name("DOT FILE")
                .default_value(DEFAULT_DIAGRAM_FILE)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("split")
                .short('s')
                .long("split")
                .help("How to cut the input into tokens. delimited splits on whitespace and ; , ( ) { } [ ], operators also separates operators glued to words")
                .value_name("DELIMITED, OPERATORS")
                .default_value("delimited")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            Arg::new("render")
                .short('r')
                .long("render")
                .help("Also render the diagram with Graphviz into the given image format, e.g. png or svg")
                .value_name("FORMAT")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .help("Save the classified tokens and counters as JSON")
                .value_name("JSON FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("visualize")
                .short('v')
                .long("visualize")
                .help("Show the transition diagram inside an interactive window that allows for zooming, panning and clicking of elements")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let split_mode = match args.get_one::<String>("split") {
        Some(mode) => mode.parse::<SplitMode>()?,
        None => SplitMode::default(),
    };

    let source = match args.get_one::<PathBuf>("input") {
        Some(file_path) => {
            info!("Reading source lines from {}", file_path.display());
            read_source_file(file_path)?
        }
        None => {
            let mut stdout = io::stdout();
            writeln!(
                stdout,
                "Enter several lines of code (leave an empty line to finish):"
            )?;
            stdout.flush()?;
            read_until_blank_line(io::stdin().lock())?
        }
    };

    let analysis = analyze(&source, split_mode);

    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &analysis)?;
    stdout.flush()?;

    let diagram = TransitionDiagram::new(analysis.get_tokens());

    let out_file_path = args
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIAGRAM_FILE));

    diagram.save(&out_file_path)?;

    if let Some(json_file_path) = args.get_one::<PathBuf>("json") {
        save_analysis(&analysis, json_file_path)?;
    }

    if let Some(format) = args.get_one::<String>("render") {
        let image_path = render(&out_file_path, format)?;
        writeln!(stdout, "Diagram rendered as {}", image_path.display())?;
    }

    if args.get_flag("visualize") {
        visualize(&diagram)?;
    }

    Ok(())
}
