//! The bigint app. Runs arithmetic commands over arbitrary-precision integers; for the numbers
//! themselves, see [libbigint's documentation](libbigint).

#![deny(missing_docs)]

mod diagnostics;
use diagnostics::{emit_bigint_diagnostics, sanitize_source_for_diagnostics, SourceLine};

pub mod logger;
use logger::{DoubleLogger, Logger, MessageFormatter, DEFAULT_LOG_FORMAT};

use clap::value_t;
use libbigint::diagnostics::{Diagnostic, Span};
use libbigint::{BigInt, Command, CommandExecutor, DEFAULT_RANDOM_DIGITS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::io::{self, Read};

/// Options to run bigint with.
pub struct Opts {
    /// Commands given on the command line, in order.
    pub commands: Vec<String>,
    /// File to read more commands from, one per line. `-` reads standard input.
    pub file: Option<String>,
    /// Starting value of the accumulator.
    pub initial: String,
    /// Number of random commands to run after the given ones.
    pub random: usize,
    /// Number of digits in the operand of every random command.
    pub digits: usize,
    /// Seed for random commands. When [None](Option::None), the generator is seeded from
    /// system entropy.
    pub seed: Option<u64>,
    /// Format of log messages.
    pub log_format: String,
    /// File log messages are appended to, in addition to standard output.
    pub log_file: Option<String>,
    /// When true, steps are not logged and only the final value is emitted.
    pub quiet: bool,
    /// When is [Some](Option::Some) diagnostic code, will explain that code.
    pub explain_diagnostic: Option<String>,
    /// When true, diagnostics will be colored.
    pub color: bool,
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let default_digits = DEFAULT_RANDOM_DIGITS.to_string();
    let app = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .arg(
            clap::Arg::with_name("commands")
                .help("Commands to run, like \"ADD 5\"")
                .next_line_help(true)
                .long_help(
                    "Commands to run, in order. A command is an operator and an operand:\n\
                    \tADD <n>:      Adds n to the current value.\n\
                    \tSUBTRACT <n>: Subtracts n from the current value.\n\
                    \tMULTIPLY <n>: Multiplies the current value by n.\n\
                    ",
                )
                .multiple(true),
        )
        .arg(
            clap::Arg::with_name("file")
                .short("-f")
                .long("--file")
                .value_name("path")
                .help("Read commands from a file, one per line. Use \"-\" for stdin.")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("initial")
                .long("--initial")
                .value_name("value")
                .help("Starting value")
                .default_value("0")
                .allow_hyphen_values(true)
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("random")
                .short("-r")
                .long("--random")
                .value_name("count")
                .help("Run this many random commands after the given ones")
                .default_value("0")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("digits")
                .short("-d")
                .long("--digits")
                .value_name("n")
                .help("Digits in the operand of each random command")
                .default_value(&default_digits)
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("seed")
                .long("--seed")
                .value_name("u64")
                .help("Seed for random commands")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("log-format")
                .long("--log-format")
                .value_name("format")
                .next_line_help(true)
                .help(
                    "Format of log messages. Placeholders:\n\
                    \t{time}:    Local time, like \"13:37:00\".\n\
                    \t{level}:   Level of the message, like \"info\".\n\
                    \t{message}: The message.\n\
                    ",
                )
                .default_value(DEFAULT_LOG_FORMAT)
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("log-file")
                .long("--log-file")
                .value_name("path")
                .help("Also append log messages to a file")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("quiet")
                .short("-q")
                .long("--quiet")
                .help("Only emit the final value"),
        )
        .arg(
            clap::Arg::with_name("explain")
                .long("--explain")
                .value_name("diagnostic")
                .help("Provide a detailed explanation for a diagnostic code.")
                .takes_value(true),
        );
    let matches = parser(app)?;

    let seed = if matches.is_present("seed") {
        Some(value_t!(matches, "seed", u64)?)
    } else {
        None
    };
    Ok(Opts {
        commands: matches
            .values_of("commands")
            .map(|commands| commands.map(str::to_owned).collect())
            .unwrap_or_default(),
        file: matches.value_of("file").map(str::to_owned),
        initial: matches.value_of("initial").unwrap_or("0").into(),
        random: value_t!(matches, "random", usize)?,
        digits: value_t!(matches, "digits", usize)?,
        seed,
        log_format: matches
            .value_of("log-format")
            .unwrap_or(DEFAULT_LOG_FORMAT)
            .into(),
        log_file: matches.value_of("log-file").map(str::to_owned),
        quiet: matches.is_present("quiet"),
        explain_diagnostic: matches.value_of("explain").map(str::to_owned),
        color,
    })
}

/// Output of a bigint execution.
#[derive(Default)]
pub struct BigintResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
    /// Whether the stdout should be emit as paged
    pub page: bool,
}

/// Builds a [BigintResult](self::BigintResult).
struct BigintResultBuilder {
    color: bool,
    stdout: String,
    stderr: String,
    page: bool,
    failed: bool,
}

impl BigintResultBuilder {
    fn new(color: bool) -> Self {
        Self {
            color,
            stdout: String::new(),
            stderr: String::new(),
            page: false,
            failed: false,
        }
    }

    fn emit(&mut self, out: &str) {
        self.stdout.push_str(out);
    }

    /// Emits diagnostics for a line and marks the run as failed.
    fn err(&mut self, line: &CommandLine, diagnostics: &[Diagnostic]) {
        let source = sanitize_source_for_diagnostics(&line.text);
        let emitted = emit_bigint_diagnostics(
            &SourceLine {
                origin: line.origin.as_deref(),
                line_number: line.line_number,
                source: &source,
            },
            diagnostics,
            self.color,
        );
        if !self.stderr.is_empty() {
            self.stderr.push('\n');
        }
        self.stderr.push_str(&emitted);
        self.failed = true;
    }

    /// Emits a plain error message and marks the run as failed.
    fn err_msg(&mut self, msg: impl std::fmt::Display) {
        self.stderr.push_str(&format!("error: {}\n", msg));
        self.failed = true;
    }

    fn page(&mut self, page: bool) {
        self.page = page;
    }

    fn finish(self) -> BigintResult {
        BigintResult {
            code: if self.failed { 1 } else { 0 },
            stdout: self.stdout,
            stderr: self.stderr,
            page: self.page,
        }
    }
}

/// A line of input holding one command.
struct CommandLine {
    /// File the line was read from. [None](Option::None) for command-line arguments.
    origin: Option<String>,
    line_number: usize,
    text: String,
}

/// Runs bigint end-to-end.
pub fn run_bigint(opts: Opts) -> BigintResult {
    let mut result = BigintResultBuilder::new(opts.color);

    if let Some(diag_code) = opts.explain_diagnostic.as_deref() {
        let codes = Diagnostic::all_codes_with_explanations();
        match codes.get::<str>(diag_code) {
            Some(explanation) => {
                result.emit(explanation);
                result.page(true);
            }
            None => result.err_msg(format!("{} is not a diagnostic code", diag_code)),
        }
        return result.finish();
    }

    let initial = match BigInt::from_digits(&opts.initial) {
        Ok(initial) => initial,
        Err(error) => {
            let line = CommandLine {
                origin: None,
                line_number: 1,
                text: opts.initial.clone(),
            };
            let span = Span::from(0..opts.initial.chars().count().max(1));
            result.err(&line, &[Diagnostic::from_number_error(&error, span)]);
            return result.finish();
        }
    };

    let lines = match collect_lines(&opts.commands, opts.file.as_deref()) {
        Ok(lines) => lines,
        Err(error) => {
            result.err_msg(error);
            return result.finish();
        }
    };

    let mut logger = match DoubleLogger::new(
        MessageFormatter::new(opts.log_format.as_str()),
        opts.log_file.as_deref(),
    ) {
        Ok(logger) => logger,
        Err(error) => {
            result.err_msg(format!("failed to write log: {}", error));
            return result.finish();
        }
    };

    let mut commands = Vec::with_capacity(lines.len() + opts.random);
    for line in lines.iter() {
        match Command::parse(&line.text) {
            Ok(command) => commands.push(command),
            Err(error) => {
                result.err(line, &[Diagnostic::from(&error)]);
                let warning = format!(r#"skipped "{}": {}"#, line.text.trim(), error);
                if let Err(error) = logger.warning(&warning) {
                    result.err_msg(format!("failed to write log: {}", error));
                    return result.finish();
                }
            }
        }
    }

    if opts.random > 0 {
        let mut rng = match opts.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        for _ in 0..opts.random {
            match Command::random(&mut rng, opts.digits) {
                Ok(command) => commands.push(command),
                Err(error) => {
                    result.err_msg(error);
                    return result.finish();
                }
            }
        }
    }

    // The executor runs the last pushed command first.
    let mut executor = CommandExecutor::new(initial);
    for command in commands.into_iter().rev() {
        executor.push(command);
    }

    let log = match execute(&mut executor, logger, opts.quiet) {
        Ok(log) => log,
        Err(error) => {
            result.err_msg(format!("failed to write log: {}", error));
            return result.finish();
        }
    };
    result.emit(&log);
    result.emit(&executor.value().to_string());
    result.finish()
}

/// Runs every pending command, returning the log destined for standard output.
fn execute(
    executor: &mut CommandExecutor,
    mut logger: DoubleLogger,
    quiet: bool,
) -> io::Result<String> {
    while let Some(step) = executor.step() {
        if !quiet {
            logger.info(&format!("{} => {}", step.command, step.after))?;
        }
    }
    Ok(logger.into_output())
}

/// Gathers command lines from arguments, then from the commands file, skipping blank lines and
/// `#` comments in the file.
fn collect_lines(args: &[String], file: Option<&str>) -> io::Result<Vec<CommandLine>> {
    let mut lines: Vec<_> = args
        .iter()
        .enumerate()
        .map(|(i, text)| CommandLine {
            origin: None,
            line_number: i + 1,
            text: text.clone(),
        })
        .collect();

    let file = match file {
        Some(file) => file,
        None => return Ok(lines),
    };
    let (origin, content) = if file == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        ("<stdin>".to_owned(), content)
    } else {
        let content = fs::read_to_string(file)
            .map_err(|e| io::Error::new(e.kind(), format!("cannot read {}: {}", file, e)))?;
        (file.to_owned(), content)
    };

    for (i, text) in content.lines().enumerate() {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push(CommandLine {
            origin: Some(origin.clone()),
            line_number: i + 1,
            text: text.to_owned(),
        });
    }
    Ok(lines)
}
