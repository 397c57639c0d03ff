use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use fplang::{
    config::SessionConfig,
    interpreter::session::{Session, render},
};
use log::LevelFilter;

/// fplang is a small functional expression language with closures, lists and
/// recursion.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to run. Without a file (and without `--eval`) an
    /// interactive prompt is started.
    file: Option<PathBuf>,

    /// Evaluates the given source text instead of a file.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// How deeply user-defined function calls may nest.
    #[arg(long, default_value_t = fplang::config::MAX_CALL_DEPTH)]
    max_depth: usize,

    /// Logs more detail to stderr (`-v` for debug, `-vv` for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let config = SessionConfig::default().with_max_call_depth(args.max_depth);
    let mut session = Session::with_config(config);

    let source = match (args.eval, args.file) {
        (Some(source), _) => source,
        (None, Some(path)) => match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        },
        (None, None) => return repl(&mut session),
    };

    match session.eval_source(&source) {
        Ok(Some(value)) => {
            println!("{}", render(&value));
            ExitCode::SUCCESS
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Reads one line at a time from stdin and prints each result.
///
/// Blank lines are skipped; end of input ends the session. Errors are printed
/// and the prompt continues.
fn repl(session: &mut Session) -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("fp> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
            None => {
                println!();
                return ExitCode::SUCCESS;
            },
        };

        if line.trim().is_empty() {
            continue;
        }

        let output = session.run(&line);
        if !output.is_empty() {
            println!("{output}");
        }
    }
}
