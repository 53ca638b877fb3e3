//! Tests for match setup, round scoring and the match state machine.

use strictly_match::{
    Marker, MatchController, MatchError, MatchOutcome, MatchPhase, MatchSetup, MoveSelector,
    Position, RoundOutcome, Scores, SetupError, Side, WINNING_SCORE,
};

fn pos(n: u8) -> Position {
    Position::from_number(n).unwrap()
}

fn new_match() -> MatchController {
    let mut setup = MatchSetup::new();
    setup
        .set_markers(Marker::new('X').unwrap(), Marker::new('O').unwrap())
        .unwrap();
    setup.set_names("Ada", "Hal").unwrap();
    setup.start().unwrap()
}

/// Plays a round where `winner` takes the top row, moving first.
fn play_winning_round(game: &mut MatchController, winner: Side) -> RoundOutcome {
    game.choose_first_mover(winner).unwrap();
    let mut outcome = RoundOutcome::Ongoing;
    for n in [1, 4, 2, 5, 3] {
        outcome = game.apply_move(pos(n)).unwrap();
    }
    outcome
}

#[test]
fn test_setup_rejects_shared_marker() {
    let mut setup = MatchSetup::new();
    let x = Marker::new('X').unwrap();
    assert_eq!(setup.set_markers(x, x), Err(SetupError::DuplicateMarker(x)));
}

#[test]
fn test_setup_rejects_bad_names() {
    let mut setup = MatchSetup::new();
    assert_eq!(
        setup.set_names("  ", "Hal"),
        Err(SetupError::BlankName(Side::Human))
    );
    assert_eq!(
        setup.set_names("Ada", ""),
        Err(SetupError::BlankName(Side::Opponent))
    );
    assert_eq!(
        setup.set_names("Ada", " Ada "),
        Err(SetupError::DuplicateName("Ada".to_string()))
    );
}

#[test]
fn test_setup_requires_markers_and_names() {
    assert_eq!(
        MatchSetup::new().start().unwrap_err(),
        SetupError::MissingMarkers
    );

    let mut setup = MatchSetup::new();
    setup
        .set_markers(Marker::new('X').unwrap(), Marker::new('O').unwrap())
        .unwrap();
    assert_eq!(setup.start().unwrap_err(), SetupError::MissingNames);
}

#[test]
fn test_new_match_awaits_first_mover() {
    let mut game = new_match();
    assert_eq!(game.phase(), MatchPhase::AwaitingFirstMover);
    assert_eq!(game.active_side(), None);
    assert_eq!(game.current_scores(), Scores::default());
    assert_eq!(game.human().name(), "Ada");
    assert_eq!(game.opponent().name(), "Hal");
    assert_eq!(
        game.apply_move(pos(1)),
        Err(MatchError::FirstMoverUndecided)
    );
}

#[test]
fn test_turns_alternate() {
    let mut game = new_match();
    game.choose_first_mover(Side::Opponent).unwrap();
    assert_eq!(
        game.choose_first_mover(Side::Human),
        Err(MatchError::FirstMoverAlreadyChosen)
    );

    assert_eq!(game.active_side(), Some(Side::Opponent));
    game.apply_move(pos(5)).unwrap();
    assert_eq!(game.active_side(), Some(Side::Human));
    game.apply_move(pos(1)).unwrap();
    assert_eq!(game.active_side(), Some(Side::Opponent));

    let sides: Vec<Side> = game.history().iter().map(|m| m.side).collect();
    assert_eq!(sides, vec![Side::Opponent, Side::Human]);
}

#[test]
fn test_marked_square_is_rejected() {
    let mut game = new_match();
    game.choose_first_mover(Side::Human).unwrap();
    game.apply_move(pos(5)).unwrap();
    assert_eq!(
        game.apply_move(pos(5)),
        Err(MatchError::SquareOccupied(pos(5)))
    );
    assert_eq!(game.active_side(), Some(Side::Opponent));
}

#[test]
fn test_out_of_turn_moves_are_rejected() {
    let mut game = new_match();
    let mut selector = MoveSelector::seeded(3);
    game.choose_first_mover(Side::Human).unwrap();
    assert_eq!(
        game.play_opponent_turn(&mut selector),
        Err(MatchError::NotYourTurn(Side::Opponent))
    );

    game.play_human_turn(pos(1)).unwrap();
    assert_eq!(
        game.play_human_turn(pos(2)),
        Err(MatchError::NotYourTurn(Side::Human))
    );
    assert_eq!(
        game.play_opponent_turn(&mut selector),
        Ok((pos(5), RoundOutcome::Ongoing))
    );
}

#[test]
fn test_human_round_win_scores_one() {
    let mut game = new_match();
    let outcome = play_winning_round(&mut game, Side::Human);

    assert_eq!(outcome, RoundOutcome::Won(Side::Human));
    assert!(game.is_round_over());
    assert!(!game.is_match_over());
    assert_eq!(game.phase(), MatchPhase::RoundEnded);
    assert_eq!(game.active_side(), None);
    assert_eq!(
        game.current_scores(),
        Scores {
            human: 1,
            opponent: 0
        }
    );
    assert_eq!(game.apply_move(pos(9)), Err(MatchError::RoundOver));
}

#[test]
fn test_opponent_round_win_scores_one() {
    let mut game = new_match();
    play_winning_round(&mut game, Side::Opponent);
    assert_eq!(
        game.current_scores(),
        Scores {
            human: 0,
            opponent: 1
        }
    );
}

#[test]
fn test_tie_changes_no_score() {
    let mut game = new_match();
    game.choose_first_mover(Side::Human).unwrap();
    let mut outcome = RoundOutcome::Ongoing;
    for n in [1, 2, 3, 5, 4, 6, 8, 7, 9] {
        assert_eq!(outcome, RoundOutcome::Ongoing);
        outcome = game.apply_move(pos(n)).unwrap();
    }

    assert_eq!(outcome, RoundOutcome::Tied);
    assert!(game.board().is_full());
    assert_eq!(game.board().winning_marker(), None);
    assert_eq!(game.current_scores(), Scores::default());
    assert_eq!(game.rounds_played(), 1);
}

#[test]
fn test_every_round_needs_a_first_mover() {
    let mut game = new_match();
    play_winning_round(&mut game, Side::Human);

    assert_eq!(game.choose_first_mover(Side::Human), Err(MatchError::RoundOver));
    game.next_round().unwrap();
    assert_eq!(game.phase(), MatchPhase::AwaitingFirstMover);
    assert!(game.board().unmarked_positions().count() == 9);
    assert!(game.history().is_empty());
    assert_eq!(
        game.apply_move(pos(1)),
        Err(MatchError::FirstMoverUndecided)
    );
}

#[test]
fn test_next_round_refused_mid_round() {
    let mut game = new_match();
    game.choose_first_mover(Side::Human).unwrap();
    game.apply_move(pos(1)).unwrap();
    assert_eq!(game.next_round(), Err(MatchError::RoundInProgress));
}

#[test]
fn test_match_ends_on_third_round_win() {
    let mut game = new_match();

    for round in 1..=WINNING_SCORE {
        play_winning_round(&mut game, Side::Human);
        assert_eq!(game.current_scores().human, round);

        if round < WINNING_SCORE {
            assert!(!game.is_match_over(), "ended after round {}", round);
            assert_eq!(game.match_outcome(), MatchOutcome::Ongoing);
            game.next_round().unwrap();
        }
    }

    assert!(game.is_match_over());
    assert_eq!(game.phase(), MatchPhase::MatchEnded);
    assert_eq!(game.match_outcome(), MatchOutcome::Won(Side::Human));
    assert_eq!(game.next_round(), Err(MatchError::MatchOver));
    assert_eq!(
        game.choose_first_mover(Side::Human),
        Err(MatchError::MatchOver)
    );
}

#[test]
fn test_ties_do_not_advance_the_match() {
    let mut game = new_match();
    play_winning_round(&mut game, Side::Opponent);
    game.next_round().unwrap();
    play_winning_round(&mut game, Side::Opponent);
    game.next_round().unwrap();

    game.choose_first_mover(Side::Human).unwrap();
    for n in [1, 2, 3, 5, 4, 6, 8, 7, 9] {
        game.apply_move(pos(n)).unwrap();
    }
    assert!(!game.is_match_over());
    assert_eq!(game.current_scores().opponent, 2);

    game.next_round().unwrap();
    play_winning_round(&mut game, Side::Opponent);
    assert_eq!(game.match_outcome(), MatchOutcome::Won(Side::Opponent));
    assert_eq!(game.rounds_played(), 4);
}

#[test]
fn test_abandoned_match_has_no_winner() {
    let mut game = new_match();
    play_winning_round(&mut game, Side::Human);
    assert_eq!(game.abandon(), MatchOutcome::NoWinner);
    assert!(game.is_match_over());
    assert_eq!(game.current_scores().human, 1);
}

#[test]
fn test_selector_drives_a_full_round() {
    let mut game = new_match();
    let mut selector = MoveSelector::seeded(11);
    game.choose_first_mover(Side::Opponent).unwrap();

    while !game.is_round_over() {
        match game.active_side() {
            Some(Side::Opponent) => {
                game.play_opponent_turn(&mut selector).unwrap();
            }
            Some(Side::Human) => {
                let open = game.board().unmarked_positions().next().unwrap();
                game.play_human_turn(open).unwrap();
            }
            None => panic!("no active side mid-round"),
        }
    }

    let scores = game.current_scores();
    match game.round_outcome() {
        RoundOutcome::Won(Side::Human) => assert_eq!(scores.human, 1),
        RoundOutcome::Won(Side::Opponent) => assert_eq!(scores.opponent, 1),
        RoundOutcome::Tied => assert_eq!(scores, Scores::default()),
        RoundOutcome::Ongoing => unreachable!(),
    }
}

#[test]
fn test_snapshot_serializes_phase() {
    let mut game = new_match();
    game.choose_first_mover(Side::Human).unwrap();
    game.apply_move(pos(5)).unwrap();

    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["phase"], "round_in_progress");
    assert_eq!(json["active"], "opponent");
    assert_eq!(json["human"]["marker"], "X");
}
