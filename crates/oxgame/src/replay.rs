//! Headless replay: apply commands to a new game and print the view.

use anyhow::{Context, Result, bail};
use oxgame_core::{GameState, GameView, Placement, Position, Square};
use tracing::{info, instrument, warn};

/// One replay command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Play at a position.
    Move(Position),
    /// Jump to a history step.
    Jump(usize),
    /// Flip the move list order.
    Sort,
    /// Flip the help panel.
    Help,
}

impl Token {
    /// Parses a token: a cell index or label, `jump=K`, `sort` or `help`.
    #[instrument]
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "sort" => return Ok(Token::Sort),
            "help" => return Ok(Token::Help),
            _ => {}
        }
        if let Some(step) = s.strip_prefix("jump=") {
            let step = step
                .parse::<usize>()
                .with_context(|| format!("Invalid jump step in '{}'", s))?;
            return Ok(Token::Jump(step));
        }
        match Position::from_label_or_number(s) {
            Some(pos) => Ok(Token::Move(pos)),
            None => bail!(
                "Unknown token '{}' (expected 0-8, a position label, jump=K, sort or help)",
                s
            ),
        }
    }
}

/// Applies tokens to a new game.
///
/// Ignored moves are logged and skipped; a bad jump stops the replay.
#[instrument(skip(tokens), fields(count = tokens.len()))]
pub fn replay(tokens: &[Token]) -> Result<GameState> {
    let mut game = GameState::new();
    for (index, token) in tokens.iter().enumerate() {
        match *token {
            Token::Move(pos) => {
                if let Placement::Ignored(rejection) = game.apply_move(pos) {
                    warn!(index, %pos, %rejection, "Replay move ignored");
                }
            }
            Token::Jump(step) => game
                .jump_to(step)
                .with_context(|| format!("Token {} (jump={}) failed", index + 1, step))?,
            Token::Sort => game.toggle_sort(),
            Token::Help => game.toggle_help(),
        }
    }
    info!(step = game.current_step(), outcome = %game.outcome(), "Replay finished");
    Ok(game)
}

/// Parses, replays and renders in one go.
pub fn run(raw: &[String], json: bool) -> Result<String> {
    let tokens = raw
        .iter()
        .map(|s| Token::parse(s))
        .collect::<Result<Vec<_>>>()?;
    let view = replay(&tokens)?.read();
    if json {
        serde_json::to_string_pretty(&view).context("Failed to serialize view")
    } else {
        Ok(render_text(&view))
    }
}

/// Plain-text rendering: status, board (or help note) and move list.
pub fn render_text(view: &GameView) -> String {
    let mut out = format!("{}\n\n", view.status());

    if *view.help_visible() {
        out.push_str("(help panel shown; board hidden)\n");
    } else {
        for (index, pos) in Position::ALL.iter().enumerate() {
            let mark = match view.board().get(*pos) {
                Square::Empty => ".".to_string(),
                Square::Occupied(player) if view.is_highlighted(*pos) => {
                    player.to_string().to_lowercase()
                }
                Square::Occupied(player) => player.to_string(),
            };
            out.push_str(&mark);
            out.push(if index % 3 == 2 { '\n' } else { ' ' });
        }
    }

    out.push('\n');
    for entry in view.ordered_moves() {
        let marker = if *entry.current() { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxgame_core::Player;

    fn tokens(raw: &[&str]) -> Vec<Token> {
        raw.iter().map(|s| Token::parse(s).unwrap()).collect()
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(Token::parse("4").unwrap(), Token::Move(Position::Center));
        assert_eq!(Token::parse("top-right").unwrap(), Token::Move(Position::TopRight));
        assert_eq!(Token::parse("jump=3").unwrap(), Token::Jump(3));
        assert_eq!(Token::parse("SORT").unwrap(), Token::Sort);
        assert_eq!(Token::parse("help").unwrap(), Token::Help);
        assert!(Token::parse("jump=x").is_err());
        assert!(Token::parse("9").is_err());
        assert!(Token::parse("corner").is_err());
    }

    #[test]
    fn test_replay_branches_after_jump() {
        let game = replay(&tokens(&["0", "1", "2", "jump=1", "5"])).unwrap();
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current().coordinates(), Some((3, 2)));
    }

    #[test]
    fn test_replay_skips_ignored_moves() {
        let game = replay(&tokens(&["4", "4", "0"])).unwrap();
        assert_eq!(game.current_step(), 2);
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_replay_rejects_bad_jump() {
        let err = replay(&tokens(&["4", "jump=5"])).unwrap_err();
        assert!(format!("{:#}", err).contains("out of range"));
    }

    #[test]
    fn test_text_rendering_marks_win_and_sort() {
        let out = run(
            &["0", "1", "3", "4", "6", "sort"].map(String::from),
            false,
        )
        .unwrap();
        let expected = "\
Winner: X

x O .
x O .
x . .

> move 5 at (1,3)
  move 4 at (2,2)
  move 3 at (1,2)
  move 2 at (2,1)
  move 1 at (1,1)
  board reset
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_json_rendering() {
        let out = run(&["center".to_string()], true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["current_step"], 1);
        assert_eq!(json["moves"][0]["label"], "board reset");
    }
}
