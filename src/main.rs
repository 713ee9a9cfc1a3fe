use std::io::{self, BufRead, Write};

use clap::Parser;
use minas::tui;
use minas::{Action, Coordinate, GameConfig, Outcome, Session};
use tracing::{error, Level};

#[derive(Parser, Debug)]
#[command(name = "minas", about = "Text-mode Minesweeper with a seeded xorshift generator", version)]
struct Args {
    /// Launch TUI mode
    #[arg(long)]
    tui: bool,
    /// Last column of the field (A-Z)
    #[arg(long, default_value_t = 'E')]
    last_column: char,
    /// Last row of the field (1-99)
    #[arg(long, default_value_t = 5)]
    last_row: u32,
    /// Number of mines
    #[arg(long, default_value_t = 3)]
    mines: usize,
    /// Generator width in bits (32 or 64)
    #[arg(long, default_value_t = 32)]
    bits: u32,
    /// Generator seed, 1 to 2^bits
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    seed: i128,
    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            last_column: self.last_column,
            last_row: self.last_row,
            mines: self.mines,
            bits: self.bits,
            seed: self.seed,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Print `prompt` and read one line. `None` on end of input.
fn ask(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Err(e) => {
            error!(error = %e, "failed to read input");
            None
        }
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Ask until the answer is a well-formed coordinate inside the field.
fn ask_coordinate(input: &mut impl BufRead, session: &Session) -> Option<Coordinate> {
    loop {
        let answer = ask(input, "Escolha uma coordenada:")?;
        if let Ok(coord) = answer.parse::<Coordinate>() {
            if session.field().in_bounds(&coord) {
                return Some(coord);
            }
        }
    }
}

fn ask_action(input: &mut impl BufRead) -> Option<Action> {
    loop {
        let answer = ask(input, "Escolha uma ação, [L]impar ou [M]arcar:")?;
        if let Ok(action) = answer.parse::<Action>() {
            return Some(action);
        }
    }
}

fn run_lines(mut session: Session) -> minas::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("{}", session);
    let Some(first) = ask_coordinate(&mut input, &session) else { return Ok(()) };
    let mut outcome = session.first_move(&first)?;

    loop {
        match outcome {
            Outcome::Lost => {
                println!("{}", session);
                println!("BOOOOOOOM!!!");
                break;
            }
            Outcome::Won => {
                println!("{}", session);
                println!("VITORIA!!!");
                break;
            }
            Outcome::Continue => {}
        }
        println!("{}", session);
        let Some(action) = ask_action(&mut input) else { break };
        let Some(coord) = ask_coordinate(&mut input, &session) else { break };
        outcome = session.play(action, &coord)?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if args.tui {
        if let Err(e) = tui::run_tui(args.config()) {
            eprintln!("TUI error: {}", e);
        }
        return;
    }
    init_logging(args.verbose);

    let session = match Session::new(args.config()) {
        Ok(s) => s,
        Err(e) => { eprintln!("{}", e); std::process::exit(2); }
    };
    if let Err(e) = run_lines(session) {
        error!(error = %e, "game aborted");
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
