//! End-to-end game scenarios driven through the public engine API.

use replay_tictactoe::{
    Command, GameState, Player, Position, SortOrder, Square, Status, reduce,
};

fn at(index: usize) -> Position {
    Position::from_index(index).expect("index on board")
}

fn play(indices: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &i in indices {
        game.try_apply_move(at(i)).expect("legal move");
    }
    game
}

#[test]
fn test_x_wins_top_row() {
    let game = play(&[0, 4, 1, 3, 2]);
    let view = game.view();

    assert_eq!(*view.winning_line(), Some([at(0), at(1), at(2)]));
    assert_eq!(view.status_text(), "Winner: X");
    assert_eq!(*view.status(), Status::Winner(Player::X));
}

#[test]
fn test_full_board_is_draw() {
    // X: 0,1,5,6,8  O: 2,3,4,7
    let game = play(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    let view = game.view();

    assert_eq!(*view.winning_line(), None);
    assert_eq!(view.status_text(), "Draw");
}

#[test]
fn test_jump_back_after_win() {
    let mut game = play(&[0, 4, 1, 3, 2]);
    game.jump_to(2).unwrap();

    assert_eq!(game.view().status_text(), "Next player: X");
    let board = game.current_board();
    assert_eq!(board.get(at(0)), Square::Occupied(Player::X));
    assert_eq!(board.get(at(4)), Square::Occupied(Player::O));
    assert_eq!(board.occupied(), 2);
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_moves_allowed_again_after_jumping_back_from_win() {
    let mut game = play(&[0, 4, 1, 3, 2]);
    game.jump_to(4).unwrap();
    game.try_apply_move(at(5)).unwrap();

    // The winning move at step 5 was replaced by X at 5.
    assert_eq!(game.history().len(), 6);
    assert_eq!(*game.view().winning_line(), None);
    assert_eq!(game.view().status_text(), "Next player: O");
    assert!(game.current_board().is_empty(at(2)));
}

#[test]
fn test_branch_discards_future() {
    let mut game = play(&[0, 4, 8, 2]);
    assert_eq!(game.history().len(), 5);

    game.jump_to(2).unwrap();
    game.try_apply_move(at(6)).unwrap();

    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_step(), 3);
    assert_eq!(game.current_snapshot().move_to(), Some(at(6)));
    assert!(game.current_board().is_empty(at(8)));
}

#[test]
fn test_replay_from_start_reproduces_history() {
    let moves = [4, 0, 8, 2, 1];
    let original = play(&moves);

    let mut replayed = original.clone();
    replayed.jump_to(0).unwrap();
    for &i in &moves {
        replayed.apply_move(at(i));
    }

    assert_eq!(replayed.history(), original.history());
    assert_eq!(replayed.current_step(), original.current_step());
}

#[test]
fn test_reducer_sequence() {
    let commands = [
        Command::Play(at(4)),
        Command::Play(at(4)),
        Command::Play(at(0)),
        Command::SetSortOrder(SortOrder::Descending),
        Command::JumpTo(9),
        Command::JumpTo(1),
    ];
    let game = commands.into_iter().fold(GameState::new(), reduce);

    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_step(), 1);
    assert_eq!(game.sort_order(), SortOrder::Descending);

    let labels: Vec<_> = game
        .move_descriptions()
        .into_iter()
        .map(|m| m.label().clone())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Go to move col:1 row:1",
            "Go to move col:2 row:2",
            "Go to game start",
        ]
    );
}
