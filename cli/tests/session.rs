use std::io::Cursor;

use engine::{GameState, Layout, Side, Square};
use kingcap::{prompt, run_session, SessionEnd};

fn play(game: &mut GameState, lines: &str) -> (SessionEnd, String) {
    play_bytes(game, lines.as_bytes())
}

fn play_bytes(game: &mut GameState, bytes: &[u8]) -> (SessionEnd, String) {
    let mut out = Vec::new();
    let end = run_session(game, Cursor::new(bytes.to_vec()), &mut out).unwrap();
    (end, String::from_utf8(out).unwrap())
}

fn sq(s: &str) -> Square {
    Square::from_notation(s).unwrap()
}

#[test]
fn rook_takes_king_and_session_stops() {
    let mut game = GameState::with_layout(Layout::KingRook);
    // the trailing line must never be read
    let (end, out) = play(&mut game, "b1 a1\na1 a2\n");

    assert_eq!(end, SessionEnd::Won { winner: Side::White });
    assert!(out.contains("black player's King is Captured white player wins"));
    assert_eq!(out.matches("player! Choose").count(), 1);
    assert!(game.is_over());
    assert_eq!(game.board().get_piece(sq("a1")).unwrap().symbol(), "Rw");
}

#[test]
fn turns_alternate_and_owner_is_enforced() {
    let mut game = GameState::with_layout(Layout::Standard);
    let (end, out) = play(&mut game, "a2 a3\na7 a6\na6 a5\nexit\n");

    assert_eq!(end, SessionEnd::Exited);
    assert!(out.contains(&prompt(Side::White)));
    assert!(out.contains(&prompt(Side::Black)));
    assert_eq!(
        out.matches("The piece is not valid to be moved with current player")
            .count(),
        1
    );
    // rejected move keeps white on move
    assert_eq!(game.current_player(), Side::White);
    assert!(game.board().get_piece(sq("a6")).is_some());
    assert!(game.board().get_piece(sq("a5")).is_none());
}

#[test]
fn each_rejection_has_its_own_message() {
    let mut game = GameState::with_layout(Layout::Standard);
    let (end, out) = play(&mut game, "a1\na4 a5\na7 a6\na1 a3\nexit\n");

    assert_eq!(end, SessionEnd::Exited);
    let expected = [
        "Input is not valid",
        "The selected coordinate didn't have a piece",
        "The piece is not valid to be moved with current player",
        "The piece is not possible to move to the destination, please choose another destination",
    ];
    let mut last = 0;
    for message in expected {
        let at = out[last..]
            .find(message)
            .unwrap_or_else(|| panic!("missing {:?}", message));
        last += at + message.len();
    }
    assert_eq!(game.current_player(), Side::White);
    assert_eq!(game.board().pieces().count(), 32);
}

#[test]
fn board_is_printed_before_every_prompt() {
    let mut game = GameState::with_layout(Layout::Standard);
    let (_, out) = play(&mut game, "e2 e4\nexit\n");

    assert_eq!(out.matches("   a  b  c  d  e  f  g  h\n").count(), 4);
    assert!(out.contains("4  .  .  .  .  Pw .  .  .  4"));
}

#[test]
fn exit_is_exact_and_case_sensitive() {
    let mut game = GameState::with_layout(Layout::Standard);
    let (end, out) = play(&mut game, "EXIT\nexit \nexit\n");

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(out.matches("Input is not valid").count(), 2);
}

#[test]
fn closed_input_ends_session() {
    let mut game = GameState::with_layout(Layout::Standard);
    let (end, _) = play(&mut game, "d2 d4\r\n");

    assert_eq!(end, SessionEnd::InputClosed);
    assert_eq!(game.current_player(), Side::Black);
}

#[test]
fn non_utf8_line_is_rejected_and_reprompted() {
    let mut game = GameState::with_layout(Layout::Standard);
    let mut bytes = vec![0xff, 0xfe, b'\n'];
    bytes.extend_from_slice(b"a2 a3\nexit\n");
    let (end, out) = play_bytes(&mut game, &bytes);

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(out.matches("Input is not valid").count(), 1);
    // the move after the bad line still runs
    assert!(game.board().get_piece(sq("a3")).is_some());
    assert_eq!(game.current_player(), Side::Black);
}
