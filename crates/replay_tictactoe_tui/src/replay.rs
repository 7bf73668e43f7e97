//! Non-interactive replay of a scripted move list.

use anyhow::{Context, Result};
use replay_tictactoe::{GameState, GameView, Position, SortOrder};
use tracing::{info, instrument};

/// Parses cell tokens (0-8 or position labels) into positions.
#[instrument]
pub fn parse_moves(tokens: &[String]) -> Result<Vec<Position>> {
    tokens
        .iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .map(|token| {
            Position::from_label_or_number(token)
                .with_context(|| format!("Unknown cell '{}' (expected 0-8 or a label)", token))
        })
        .collect()
}

/// Applies `moves` to a new game, then optionally jumps to `jump`.
///
/// Illegal moves are ignored exactly as in interactive play. An out-of-range
/// jump is an error.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[Position], jump: Option<usize>, sort_order: SortOrder) -> Result<GameState> {
    let mut game = GameState::with_sort_order(sort_order);
    for &pos in moves {
        game.apply_move(pos);
    }

    if let Some(step) = jump {
        game.jump_to(step)?;
    }

    info!(
        steps = game.history().len(),
        current = game.current_step(),
        "Replay finished"
    );
    Ok(game)
}

/// Renders a view as plain text: board, status and move list.
pub fn render_text(view: &GameView) -> String {
    let mut out = format!("{}\n\n{}\n", view.board(), view.status_text());
    if let Some(line) = view.winning_line() {
        let cells: Vec<_> = line.iter().map(|p| p.to_index().to_string()).collect();
        out.push_str(&format!("Line: {}\n", cells.join(",")));
    }
    out.push('\n');
    for m in view.moves() {
        let marker = if *m.is_current() { '*' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, m.step(), m.label()));
    }
    out
}

/// Runs the `replay` command and returns what should be printed.
pub fn run(
    tokens: &[String],
    jump: Option<usize>,
    sort_order: SortOrder,
    json: bool,
) -> Result<String> {
    let moves = parse_moves(tokens)?;
    let view = replay(&moves, jump, sort_order)?.view();

    if json {
        serde_json::to_string_pretty(&view).context("Failed to serialize view")
    } else {
        Ok(render_text(&view))
    }
}
