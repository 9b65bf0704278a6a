extern crate ansi_term;
extern crate linefeed;
use tft::mach::{Canvas, Color, Command, Runtime};
use tft::{error, lang::Error};
use ansi_term::{Colour, Style};
use clap::Parser;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Terminal};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, Level};

/// Run Arduino TFT drawing sketches in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tft", version, about)]
struct Args {
    /// Sketch to run; starts an interactive session when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Surface width in pixels
    #[arg(short = 'W', long, default_value_t = 240,
        value_parser = clap::value_parser!(u32).range(1..=1920))]
    width: u32,

    /// Surface height in pixels
    #[arg(short = 'H', long, default_value_t = 320,
        value_parser = clap::value_parser!(u32).range(1..=1920))]
    height: u32,

    /// Write the rendered surface as a binary PPM image
    #[arg(short, long, value_name = "FILE.ppm")]
    output: Option<PathBuf>,

    /// Terminal columns used by the preview
    #[arg(short, long, default_value_t = 80,
        value_parser = clap::value_parser!(u32).range(1..))]
    columns: u32,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    let result = match &args.file {
        Some(file) => run_file(&args, file),
        None => main_loop(&args).map_err(|e| error!(InternalError; e.to_string())),
    };
    if let Err(error) = result {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run_file(args: &Args, file: &Path) -> Result<(), Error> {
    let source = read_source(file)?;
    info!(file = %file.display(), width = args.width, height = args.height, "running");
    let mut canvas = Canvas::new(args.width, args.height);
    let errors = Runtime::new(args.width, args.height).run(&source, &mut canvas);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let io = |e: std::io::Error| error!(InternalError; e.to_string());
    for error in errors.iter() {
        writeln!(out, "{}", Style::new().bold().paint(error.to_string())).map_err(io)?;
    }
    write!(out, "{}", preview(&canvas, args.columns)).map_err(io)?;
    if let Some(output) = &args.output {
        write_ppm(&canvas, output)?;
    }
    Ok(())
}

fn main_loop(args: &Args) -> std::io::Result<()> {
    let command = Interface::new("tft")?;
    command.set_prompt("> ")?;
    command.set_completer(Arc::new(CommandCompleter));
    let mut program: Vec<String> = vec![];

    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if string.trim().is_empty() {
            continue;
        }
        command.add_history_unique(string.clone());
        let report = |error: Error| -> std::io::Result<()> {
            command.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint(error.to_string())
            ))
        };
        match Directive::parse(&string) {
            Some(Directive::Run) => {
                let (canvas, errors) = render(args, &program);
                for error in errors {
                    report(error)?;
                }
                command.write_fmt(format_args!("{}", preview(&canvas, args.columns)))?;
            }
            Some(Directive::List) => {
                for (index, line) in program.iter().enumerate() {
                    command.write_fmt(format_args!("{:>4} {}\n", index + 1, line))?;
                }
            }
            Some(Directive::New) => program.clear(),
            Some(Directive::Load(filename)) => match load(&filename) {
                Ok(lines) => program = lines,
                Err(error) => report(error)?,
            },
            Some(Directive::Save(filename)) => {
                if let Err(error) = save(&program, &filename) {
                    report(error)?;
                }
            }
            None => {
                program.push(string);
                let number = program.len();
                let (_, errors) = render(args, &program);
                for error in errors {
                    if error.line_number() == Some(number) {
                        report(error)?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn render(args: &Args, program: &[String]) -> (Canvas, Vec<Error>) {
    let mut canvas = Canvas::new(args.width, args.height);
    let errors = Runtime::new(args.width, args.height).run(&program.join("\n"), &mut canvas);
    debug!(lines = program.len(), errors = errors.len(), "rendered");
    (canvas, errors)
}

/// Buffer commands understood by the interactive session.
#[derive(Debug, PartialEq)]
enum Directive {
    Run,
    List,
    New,
    Load(String),
    Save(String),
}

impl Directive {
    fn parse(s: &str) -> Option<Directive> {
        let s = s.trim();
        let (word, rest) = match s.find(char::is_whitespace) {
            Some(index) => (&s[..index], s[index..].trim()),
            None => (s, ""),
        };
        match (word.to_ascii_uppercase().as_str(), rest) {
            ("RUN", "") => Some(Directive::Run),
            ("LIST", "") => Some(Directive::List),
            ("NEW", "") => Some(Directive::New),
            ("LOAD", name) => filename(name).map(Directive::Load),
            ("SAVE", name) => filename(name).map(Directive::Save),
            _ => None,
        }
    }
}

fn filename(s: &str) -> Option<String> {
    let name = s.strip_prefix('"')?.strip_suffix('"')?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

struct CommandCompleter;

impl<Term: Terminal> Completer<Term> for CommandCompleter {
    fn complete(
        &self,
        word: &str,
        _prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let partial = word.strip_prefix("tft.")?;
        let comp_list: Vec<Completion> = Command::ALL
            .iter()
            .filter(|c| c.name().starts_with(partial))
            .map(|c| {
                let mut comp = Completion::simple(format!("tft.{}(", c.name()));
                comp.suffix = linefeed::complete::Suffix::None;
                comp
            })
            .collect();
        if comp_list.is_empty() {
            None
        } else {
            Some(comp_list)
        }
    }
}

/// Half-block rendering: each character cell shows two source rows,
/// the upper one as foreground and the lower one as background.
fn preview(canvas: &Canvas, columns: u32) -> String {
    let step = canvas.width().div_ceil(columns).max(1) as i64;
    let mut out = String::new();
    let mut y = 0;
    while y < canvas.height() as i64 {
        let mut x = 0;
        while x < canvas.width() as i64 {
            let top = canvas.pixel(x, y).unwrap_or(Color::BLACK);
            let bottom = canvas.pixel(x, y + step).unwrap_or(Color::BLACK);
            let style = Style::new().fg(colour(top)).on(colour(bottom));
            out.push_str(&style.paint("\u{2580}").to_string());
            x += step;
        }
        out.push('\n');
        y += step * 2;
    }
    out
}

fn colour(color: Color) -> Colour {
    Colour::RGB(color.r, color.g, color.b)
}

fn read_source(filename: &Path) -> Result<String, Error> {
    std::fs::read_to_string(filename).map_err(|error| {
        let msg = format!("{}: {}", filename.display(), error);
        match error.kind() {
            ErrorKind::NotFound => error!(FileNotFound; msg),
            _ => error!(InternalError; msg),
        }
    })
}

fn load(filename: &str) -> Result<Vec<String>, Error> {
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg)),
                _ => return Err(error!(InternalError; msg)),
            }
        }
    };
    let mut lines = vec![];
    for line in reader.lines() {
        match line {
            Err(error) => return Err(error!(InternalError; error.to_string())),
            Ok(line) => lines.push(line),
        }
    }
    Ok(lines)
}

fn save(program: &[String], filename: &str) -> Result<(), Error> {
    if program.is_empty() {
        return Err(error!(InternalError; "nothing to save"));
    }
    let mut file = match File::create(filename) {
        Ok(file) => file,
        Err(error) => return Err(error!(InternalError; error.to_string())),
    };
    for line in program {
        if let Err(error) = writeln!(file, "{}", line) {
            return Err(error!(InternalError; error.to_string()));
        }
    }
    Ok(())
}

fn write_ppm(canvas: &Canvas, filename: &Path) -> Result<(), Error> {
    std::fs::write(filename, canvas.to_ppm()).map_err(|error| {
        error!(InternalError; format!("{}: {}", filename.display(), error))
    })?;
    info!(file = %filename.display(), "wrote image");
    Ok(())
}
