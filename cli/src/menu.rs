use anyhow::{anyhow, bail};
use reversi_core::{Color, Coord, Coord2, GameConfig, GameError, GameSession, SessionState};
use std::io::{BufRead, Write};
use std::str::FromStr;

const MENU: &str = "Choices (1-5):\n1. Play\n2. Hint\n3. Pass\n4. Print\n5. Quit\n\nEnter your choice: ";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    Play,
    Hint,
    Pass,
    Print,
    Quit,
}

impl FromStr for Choice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim() {
            "1" => Ok(Self::Play),
            "2" => Ok(Self::Hint),
            "3" => Ok(Self::Pass),
            "4" => Ok(Self::Print),
            "5" => Ok(Self::Quit),
            other => Err(anyhow!("Unknown menu choice {other:?}")),
        }
    }
}

/// Parses `"row col"`, both zero-based.
pub fn parse_coords(line: &str) -> Result<Coord2, GameError> {
    let mut parts = line
        .split_whitespace()
        .map(|part| part.parse::<Coord>().map_err(|_| GameError::InvalidCoords));

    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(GameError::InvalidCoords);
    };
    Ok((row?, col?))
}

/// Next trimmed line, `None` once the input is closed.
fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

pub fn greet<W: Write>(output: &mut W) -> anyhow::Result<()> {
    writeln!(output, "Hello! Welcome to Reversi!")?;
    writeln!(output, "Black moves first, a move has to flip at least one piece.")?;
    Ok(())
}

/// Asks for the board size until it is an even number of at least 4.
pub fn prompt_size<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<GameConfig> {
    write!(output, "Please enter the size of the board (even integer >= 4): ")?;
    loop {
        output.flush()?;

        let Some(line) = read_line(input)? else {
            bail!("Input closed before a board size was chosen");
        };
        let size = line.parse::<Coord>().map_err(|_| GameError::InvalidSize(0));
        match size.and_then(GameConfig::new) {
            Ok(config) => return Ok(config),
            Err(err) => {
                log::debug!("Rejected size {line:?}: {err}");
                write!(
                    output,
                    "Sorry! Size of the board needs to be EVEN and at least 4!\nEnter again: "
                )?;
            }
        }
    }
}

pub fn prompt_color<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<Color> {
    loop {
        write!(output, "Player 1, choose your color (B - Black / W - White): ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            bail!("Input closed before a color was chosen");
        };
        match line.parse() {
            Ok(color) => return Ok(color),
            Err(err) => writeln!(output, "{err}, please enter B or W")?,
        }
    }
}

/// Runs the menu until the board is full, a player quits or the input is closed.
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    let first_player = session.first_player();
    let second_player = first_player.opponent().unwrap_or(Color::Empty);
    writeln!(
        output,
        "Player 1 is {first_player} and Player 2 is {second_player}."
    )?;
    write!(output, "\n{}", session.board())?;

    while !session.is_finished() {
        write!(
            output,
            "\nPlayer {}({}), it's your turn.\n{MENU}",
            session.current_seat(),
            session.current_color()
        )?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            log::info!("Input closed, leaving the game");
            return Ok(());
        };
        let choice = match line.parse::<Choice>() {
            Ok(choice) => choice,
            Err(err) => {
                log::debug!("{err}");
                writeln!(output, "Sorry! Wrong choice! Try again!")?;
                continue;
            }
        };
        log::debug!("Turn {}: {:?}", session.turn(), choice);

        match choice {
            Choice::Play => {
                write!(output, "\nEnter the place to set your piece at (r c): ")?;
                output.flush()?;
                let Some(line) = read_line(input)? else {
                    log::info!("Input closed, leaving the game");
                    return Ok(());
                };
                match parse_coords(&line).and_then(|coords| session.play(coords)) {
                    Ok(outcome) => {
                        log::info!("Flipped {} pieces", outcome.flipped);
                        write!(output, "\n{}", session.board())?;
                    }
                    Err(err) => writeln!(output, "Sorry! Invalid move: {err}. Try again!")?,
                }
            }
            Choice::Hint => write!(output, "\n{}", session.hints())?,
            Choice::Pass => session.pass()?,
            Choice::Print => write!(output, "\n{}", session.board())?,
            Choice::Quit => {
                session.forfeit()?;
            }
        }
    }

    announce(session, output)
}

fn announce<W: Write>(session: &GameSession, output: &mut W) -> anyhow::Result<()> {
    let state = session.state();
    let Some(winner) = state.winner() else {
        return Ok(());
    };
    let score = session.board().score();

    match (state, winner.color()) {
        (_, None) => writeln!(
            output,
            "\nIt's a draw! Both lost! ({}-{})",
            score.black, score.white
        )?,
        (SessionState::Forfeited { .. }, Some(color)) => writeln!(
            output,
            "\nPlayer {}({}) won!\nHope you enjoyed!",
            session.seat_of(color),
            color
        )?,
        (_, Some(color)) => writeln!(
            output,
            "\n{} won! Player {} won! ({}-{})",
            winner,
            session.seat_of(color),
            score.black,
            score.white
        )?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_core::GameConfig;

    fn play_script(first_player: Color, script: &str) -> (GameSession, String) {
        let mut session = GameSession::new(GameConfig::new(4).unwrap(), first_player).unwrap();
        let mut input = script.as_bytes();
        let mut output = Vec::new();

        run(&mut session, &mut input, &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parse_choices() {
        assert_eq!("1".parse::<Choice>().unwrap(), Choice::Play);
        assert_eq!(" 5 ".parse::<Choice>().unwrap(), Choice::Quit);
        assert!("6".parse::<Choice>().is_err());
        assert!("play".parse::<Choice>().is_err());
    }

    #[test]
    fn parse_coords_accepts_two_numbers() {
        assert_eq!(parse_coords("0 2"), Ok((0, 2)));
        assert_eq!(parse_coords("  3   1 "), Ok((3, 1)));
        assert_eq!(parse_coords("-1 2"), Err(GameError::InvalidCoords));
        assert_eq!(parse_coords("1"), Err(GameError::InvalidCoords));
        assert_eq!(parse_coords("1 2 3"), Err(GameError::InvalidCoords));
        assert_eq!(parse_coords("a b"), Err(GameError::InvalidCoords));
    }

    #[test]
    fn prompt_size_retries_until_valid() {
        let mut input = "5\nbig\n2\n6\n".as_bytes();
        let mut output = Vec::new();

        let config = prompt_size(&mut input, &mut output).unwrap();

        assert_eq!(config.size(), 6);
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("Enter again: ").count(), 3);
    }

    #[test]
    fn prompt_size_fails_on_closed_input() {
        let mut input = "7\n".as_bytes();
        let mut output = Vec::new();
        assert!(prompt_size(&mut input, &mut output).is_err());
    }

    #[test]
    fn prompt_color_retries_until_valid() {
        let mut input = "x\nw\n".as_bytes();
        let mut output = Vec::new();

        let color = prompt_color(&mut input, &mut output).unwrap();

        assert_eq!(color, Color::White);
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("please enter B or W"));
    }

    #[test]
    fn prompt_color_fails_on_closed_input() {
        let mut input = "".as_bytes();
        let mut output = Vec::new();
        assert!(prompt_color(&mut input, &mut output).is_err());
    }

    #[test]
    fn hint_reject_play_then_quit() {
        let (session, output) = play_script(Color::Black, "4\n2\n1\n0 1\n1\n0 2\n9\n5\n");

        assert!(output.starts_with("Player 1 is B and Player 2 is W.\n"));
        assert!(output.contains(" | - - B - |\n | - B W B |\n | B W B - |\n | - B - - |\n"));
        assert!(output.contains("Sorry! Invalid move: Move does not capture any piece. Try again!"));
        assert!(output.contains(" | - - B - |\n | - B B - |\n | - W B - |\n | - - - - |\n"));
        assert!(output.contains("Sorry! Wrong choice! Try again!"));
        assert!(output.contains("Player 2(W), it's your turn."));
        assert!(output.ends_with("\nPlayer 1(B) won!\nHope you enjoyed!\n"));
        assert!(session.is_finished());
    }

    #[test]
    fn full_game_through_the_menu() {
        let script = [
            "1", "0 2", "1", "0 1", "1", "0 0", "1", "0 3", "1", "1 3", "1", "2 3", "1", "3 0",
            "1", "1 0", "1", "2 0", "3", "1", "3 2", "1", "3 1", "1", "3 3",
        ]
        .join("\n");
        let (session, output) = play_script(Color::White, &script);

        assert_eq!(session.turn(), 13);
        assert!(output.ends_with(
            " | B B B W |\n | B B B W |\n | B B B W |\n | B W B B |\n\nBlack won! Player 2 won! (12-4)\n"
        ));
    }

    #[test]
    fn closed_input_leaves_quietly() {
        let (session, output) = play_script(Color::Black, "");

        assert!(!session.is_finished());
        assert!(output.ends_with("Enter your choice: "));
    }
}
