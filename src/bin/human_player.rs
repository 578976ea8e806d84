use anyhow::Result;
use clap::Parser;
use color_lines::engine::{Cell, Pos, BOARD_SIZE};
use color_lines::game::{Game, Phase};
use color_lines::record::Record;
use std::io::{self, Write};
use std::path::PathBuf;

/// Interactive Color Lines in the terminal.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path of the best-score slot
    #[clap(long, default_value = "lines-record.txt")]
    record: PathBuf,

    /// RNG seed for a reproducible game
    #[clap(long)]
    seed: Option<u64>,
}

fn forecast_string(forecast: &[Cell]) -> String {
    forecast.iter().map(|c| c.to_char()).collect()
}

fn main() -> Result<()> {
    let args = Args::parse();
    let record = Record::open(&args.record);
    let mut game = match args.seed {
        Some(seed) => Game::with_seed(record, seed),
        None => Game::new(record),
    };

    println!("Welcome to Color Lines!");
    println!("Click cells by typing their coordinates: a ball to select it,");
    println!("an empty cell to send the selected ball there.");

    loop {
        println!("---------------------");
        println!(
            "Score: {}  Best: {}  Next: {}",
            game.score(),
            game.best(),
            forecast_string(&game.forecast())
        );
        println!("{}", game.board().to_string_with_highlight(game.selected()));

        if game.phase() == Phase::GameOver {
            println!();
            println!("---------------------");
            println!("GAME OVER! Your score is {}.", game.score());
            print!("Play again? (y/n): ");
            io::stdout().flush()?;
            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;
            if answer.trim().eq_ignore_ascii_case("y") {
                game.reset();
                continue;
            }
            break;
        }

        print!("Enter a cell (x y), or 'q' to quit: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let trimmed_input = input.trim();
        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }

        let parts: Vec<&str> = trimmed_input.split_whitespace().collect();
        if parts.len() != 2 {
            println!("Invalid input format. Use 'x y' or 'q'.");
            continue;
        }
        let (x, y) = match (parts[0].parse::<usize>(), parts[1].parse::<usize>()) {
            (Ok(x), Ok(y)) => (x, y),
            _ => {
                println!("Invalid input: please enter numbers for x and y (e.g., '3 4').");
                continue;
            }
        };
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            println!(
                "Invalid coordinates: x and y must be between 0 and {}.",
                BOARD_SIZE - 1
            );
            continue;
        }

        let pos = Pos::new(x, y);
        if game.board().get(pos) != Cell::Empty {
            game.select(pos);
            continue;
        }

        if game.phase() != Phase::Selected {
            println!("Select a ball first.");
            continue;
        }
        match game.attempt_move(pos) {
            Some(outcome) => {
                println!("Moved in {} steps.", outcome.path.len());
                if !outcome.cleared.is_empty() {
                    println!("Cleared {} balls!", outcome.cleared.len());
                }
            }
            None => {
                println!("No path to {} - the way is blocked.", pos);
            }
        }
    }

    Ok(())
}
