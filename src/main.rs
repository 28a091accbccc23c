#![cfg(feature = "demo")]

use checkers::game::state::Phase;
use checkers::game::{Game, GameStatus};
use checkers::play::Play;
use checkers::rules::Ruleset;
use checkers::tiles::Direction;
use clap::Parser;
use log::LevelFilter;
use std::io::{stdin, stdout, BufRead, Write};
use std::str::FromStr;

#[derive(Parser, Debug)]
struct Arguments {
    /// Start with eight pieces per side instead of twelve.
    #[clap(long)]
    sparse: bool,
}

const HELP: &str = "\
Enter a play as a square and a direction, eg, \"C3 NE\". Directions are NW, NE, SW and SE.
While a piece must jump again, the direction alone is enough.
Other commands: \"pass\", \"help\" (or \"?\"), \"exit\".";

enum Command {
    Play(Play),
    Pass,
    Help,
    Exit
}

fn parse_command(line: &str, phase: Phase) -> Result<Command, String> {
    match line.to_lowercase().as_str() {
        "pass" => return Ok(Command::Pass),
        "help" | "?" => return Ok(Command::Help),
        "exit" => return Ok(Command::Exit),
        _ => {}
    }
    if let Phase::AwaitingContinuation(_, tile) = phase {
        if let Ok(direction) = Direction::from_str(line) {
            return Ok(Command::Play(Play::new(tile, direction)))
        }
    }
    Play::from_str(line).map(Command::Play).map_err(|e| e.to_string())
}

fn prompt(phase: Phase) -> String {
    match phase {
        Phase::AwaitingMove(side) => format!("{side} to play:"),
        Phase::AwaitingContinuation(side, tile) => format!("{side} must jump again from {tile}:")
    }
}

/// Run the read/dispatch loop until the game ends, the input is exhausted or the user exits.
fn run(game: &mut Game, input: &mut impl BufRead, output: &mut impl Write) -> std::io::Result<()> {
    let mut line = String::new();
    writeln!(output, "{}", game.state().board)?;
    while game.status() == GameStatus::Ongoing {
        writeln!(output, "{}", prompt(game.phase()))?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(())
        }
        let line = line.trim();
        if line.is_empty() {
            continue
        }
        match parse_command(line, game.phase()) {
            Ok(Command::Play(play)) => match game.do_play(play) {
                Ok(outcome) => {
                    if let Some(captured) = outcome.captured {
                        writeln!(output, "Captured {captured}.")?;
                    }
                    if outcome.promoted {
                        writeln!(output, "Crowned at {}.", outcome.to)?;
                    }
                    writeln!(output, "{}", game.state().board)?;
                },
                Err(e) => writeln!(output, "{e}. Try again.")?
            },
            Ok(Command::Pass) => match game.pass() {
                Ok(_) => writeln!(output, "{}", game.state().board)?,
                Err(e) => writeln!(output, "Unable to pass: {e}.")?
            },
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(Command::Exit) => return Ok(()),
            Err(e) => writeln!(output, "Invalid input ({e}). Type \"help\" for help.")?
        }
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    let arguments = Arguments::parse();

    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let ruleset = if arguments.sparse { Ruleset::Sparse } else { Ruleset::Normal };
    println!("checkers demo ({ruleset} rules). Type \"help\" for help.");
    let mut game = Game::new(ruleset);
    game.on_game_ended(|winner| println!("Game over. Winner is {winner}."));
    run(&mut game, &mut stdin().lock(), &mut stdout().lock())
}

#[cfg(test)]
mod tests {
    use crate::run;
    use checkers::game::state::Phase;
    use checkers::game::Game;
    use checkers::pieces::Color::Black;
    use checkers::tiles::Tile;
    use std::io::Cursor;

    #[test]
    fn test_run() {
        let mut game = Game::with_board("8/8/8/1w6/8/3w4/4b3/8", Black).unwrap();
        let mut input = Cursor::new("e7 nw\npass\nnw\n");
        let mut output = vec![];
        run(&mut game, &mut input, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("black must jump again from C5:"));
        assert!(output.contains("Unable to pass: piece at C5 must jump again."));
        assert!(output.contains("Captured B4."));
        assert_eq!(game.phase(), Phase::AwaitingMove(checkers::pieces::Color::White));
        assert_eq!(game.state().board.get_piece(Tile::new(1, 3)).map(|p| p.color), Some(Black));
    }

    #[test]
    fn test_bad_input() {
        let mut game = Game::default();
        let mut input = Cursor::new("C3 UP\n?\nexit\nB6 NE\n");
        let mut output = vec![];
        run(&mut game, &mut input, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Invalid input"));
        assert!(output.contains("Directions are NW, NE, SW and SE."));
        assert_eq!(game.state_history().len(), 1);
    }
}
