//! Match setup and the round/match state machine.

use crate::{
    Board, Marker, MatchError, MatchOutcome, MatchPhase, Move, MoveSelector, Player, Position,
    RoundOutcome, Scores, SetupError, Side,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Round wins needed to take the match.
pub const WINNING_SCORE: u32 = 3;

// ─────────────────────────────────────────────────────────────
//  Setup
// ─────────────────────────────────────────────────────────────

/// Collects markers and names before the first round.
#[derive(Debug, Clone, Default)]
pub struct MatchSetup {
    markers: Option<(Marker, Marker)>,
    names: Option<(String, String)>,
}

impl MatchSetup {
    /// Creates an empty setup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns each side's marker. The markers must differ.
    #[instrument(skip(self))]
    pub fn set_markers(&mut self, human: Marker, opponent: Marker) -> Result<(), SetupError> {
        if human == opponent {
            return Err(SetupError::DuplicateMarker(human));
        }
        self.markers = Some((human, opponent));
        Ok(())
    }

    /// Assigns each side's name. Names are trimmed, must be non-blank and
    /// must differ.
    #[instrument(skip(self, human, opponent))]
    pub fn set_names(
        &mut self,
        human: impl AsRef<str>,
        opponent: impl AsRef<str>,
    ) -> Result<(), SetupError> {
        let human = human.as_ref().trim();
        let opponent = opponent.as_ref().trim();
        if human.is_empty() {
            return Err(SetupError::BlankName(Side::Human));
        }
        if opponent.is_empty() {
            return Err(SetupError::BlankName(Side::Opponent));
        }
        if human == opponent {
            return Err(SetupError::DuplicateName(human.to_string()));
        }
        self.names = Some((human.to_string(), opponent.to_string()));
        Ok(())
    }

    /// Finishes setup, yielding a match waiting for its first mover.
    #[instrument(skip(self))]
    pub fn start(self) -> Result<MatchController, SetupError> {
        let (human_marker, opponent_marker) = self.markers.ok_or(SetupError::MissingMarkers)?;
        let (human_name, opponent_name) = self.names.ok_or(SetupError::MissingNames)?;
        info!(%human_name, %opponent_name, "Starting match");
        Ok(MatchController {
            board: Board::new(),
            human: Player::new(human_marker, human_name),
            opponent: Player::new(opponent_marker, opponent_name),
            phase: MatchPhase::AwaitingFirstMover,
            active: None,
            round: RoundOutcome::Ongoing,
            outcome: MatchOutcome::Ongoing,
            history: Vec::new(),
            rounds_played: 0,
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Controller
// ─────────────────────────────────────────────────────────────

/// Owns the board and both players for one match.
///
/// Every round starts with no active side; [`MatchController::choose_first_mover`]
/// must be called before the first move of each round, not just once per match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchController {
    board: Board,
    human: Player,
    opponent: Player,
    phase: MatchPhase,
    active: Option<Side>,
    round: RoundOutcome,
    outcome: MatchOutcome,
    history: Vec<Move>,
    rounds_played: u32,
}

impl MatchController {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the human player.
    pub fn human(&self) -> &Player {
        &self.human
    }

    /// Returns the computer player.
    pub fn opponent(&self) -> &Player {
        &self.opponent
    }

    /// Returns the player for `side`.
    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Human => &self.human,
            Side::Opponent => &self.opponent,
        }
    }

    fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::Human => &mut self.human,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// The side to move, or `None` while the first mover is undecided.
    pub fn active_side(&self) -> Option<Side> {
        self.active
    }

    /// Moves played so far this round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Rounds finished so far, ties included.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Round wins needed to take the match.
    pub fn winning_score(&self) -> u32 {
        WINNING_SCORE
    }

    /// Result of the current round.
    pub fn round_outcome(&self) -> RoundOutcome {
        self.round
    }

    /// Result of the match.
    pub fn match_outcome(&self) -> MatchOutcome {
        self.outcome
    }

    /// Checks if the current round has finished.
    pub fn is_round_over(&self) -> bool {
        self.round.is_over()
    }

    /// Checks if the match has finished.
    pub fn is_match_over(&self) -> bool {
        self.phase == MatchPhase::MatchEnded
    }

    /// Round wins per side.
    pub fn current_scores(&self) -> Scores {
        Scores {
            human: self.human.score(),
            opponent: self.opponent.score(),
        }
    }

    /// Picks who moves first this round.
    #[instrument(skip(self))]
    pub fn choose_first_mover(&mut self, side: Side) -> Result<(), MatchError> {
        match self.phase {
            MatchPhase::AwaitingFirstMover => {
                self.active = Some(side);
                self.phase = MatchPhase::RoundInProgress;
                info!(first = %side, "First mover chosen");
                Ok(())
            }
            MatchPhase::RoundInProgress => Err(MatchError::FirstMoverAlreadyChosen),
            MatchPhase::RoundEnded => Err(MatchError::RoundOver),
            MatchPhase::MatchEnded => Err(MatchError::MatchOver),
        }
    }

    /// Places the active side's marker at `pos`.
    ///
    /// After the move the board is checked for a completed line (the mover
    /// scores one round win) and then for a full board (a tie, no score
    /// change). Otherwise the turn passes to the other side.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: Position) -> Result<RoundOutcome, MatchError> {
        let side = self.require_active()?;
        if !self.board.is_unmarked(pos) {
            return Err(MatchError::SquareOccupied(pos));
        }

        let marker = self.player(side).marker();
        self.board.assign(pos, marker);
        self.history.push(Move::new(side, marker, pos));
        debug!(%side, %pos, "Move applied");

        self.evaluate(side);
        Ok(self.round)
    }

    /// Applies a human move, rejecting it if the opponent is to move.
    #[instrument(skip(self))]
    pub fn play_human_turn(&mut self, pos: Position) -> Result<RoundOutcome, MatchError> {
        if self.require_active()? != Side::Human {
            return Err(MatchError::NotYourTurn(Side::Human));
        }
        self.apply_move(pos)
    }

    /// Asks `selector` for the opponent's move and applies it.
    #[instrument(skip(self, selector))]
    pub fn play_opponent_turn<R: Rng>(
        &mut self,
        selector: &mut MoveSelector<R>,
    ) -> Result<(Position, RoundOutcome), MatchError> {
        if self.require_active()? != Side::Opponent {
            return Err(MatchError::NotYourTurn(Side::Opponent));
        }
        let pos = selector
            .select(&self.board, self.opponent.marker(), self.human.marker())
            .ok_or(MatchError::RoundOver)?;
        let outcome = self.apply_move(pos)?;
        Ok((pos, outcome))
    }

    /// Clears the board for another round. The first mover must be chosen
    /// again afterwards.
    #[instrument(skip(self))]
    pub fn next_round(&mut self) -> Result<(), MatchError> {
        match self.phase {
            MatchPhase::RoundEnded => {
                self.board.reset();
                self.history.clear();
                self.active = None;
                self.round = RoundOutcome::Ongoing;
                self.phase = MatchPhase::AwaitingFirstMover;
                debug!(round = self.rounds_played + 1, "Board reset for next round");
                Ok(())
            }
            MatchPhase::AwaitingFirstMover => Ok(()),
            MatchPhase::RoundInProgress => Err(MatchError::RoundInProgress),
            MatchPhase::MatchEnded => Err(MatchError::MatchOver),
        }
    }

    /// Ends the match early, e.g. when the human declines another round.
    ///
    /// A side already at the winning score is still reported as the winner;
    /// otherwise the outcome is [`MatchOutcome::NoWinner`].
    #[instrument(skip(self))]
    pub fn abandon(&mut self) -> MatchOutcome {
        if self.phase != MatchPhase::MatchEnded {
            self.outcome = self.outcome_from_scores().unwrap_or(MatchOutcome::NoWinner);
            self.phase = MatchPhase::MatchEnded;
            self.active = None;
            info!(outcome = ?self.outcome, "Match abandoned");
        }
        self.outcome
    }

    fn require_active(&self) -> Result<Side, MatchError> {
        match (self.phase, self.active) {
            (MatchPhase::RoundInProgress, Some(side)) => Ok(side),
            (MatchPhase::AwaitingFirstMover, _) | (MatchPhase::RoundInProgress, None) => {
                Err(MatchError::FirstMoverUndecided)
            }
            (MatchPhase::RoundEnded, _) => Err(MatchError::RoundOver),
            (MatchPhase::MatchEnded, _) => Err(MatchError::MatchOver),
        }
    }

    fn side_of(&self, marker: Marker) -> Option<Side> {
        if marker == self.human.marker() {
            Some(Side::Human)
        } else if marker == self.opponent.marker() {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    fn outcome_from_scores(&self) -> Option<MatchOutcome> {
        if self.human.score() >= WINNING_SCORE {
            Some(MatchOutcome::Won(Side::Human))
        } else if self.opponent.score() >= WINNING_SCORE {
            Some(MatchOutcome::Won(Side::Opponent))
        } else {
            None
        }
    }

    fn evaluate(&mut self, mover: Side) {
        if let Some(winner) = self.board.winning_marker().and_then(|m| self.side_of(m)) {
            self.player_mut(winner).award_round();
            self.end_round(RoundOutcome::Won(winner));
        } else if self.board.is_full() {
            self.end_round(RoundOutcome::Tied);
        } else {
            self.active = Some(mover.other());
        }
    }

    fn end_round(&mut self, outcome: RoundOutcome) {
        self.round = outcome;
        self.rounds_played += 1;
        self.active = None;
        info!(?outcome, scores = ?self.current_scores(), "Round ended");

        match self.outcome_from_scores() {
            Some(result) => {
                self.outcome = result;
                self.phase = MatchPhase::MatchEnded;
                info!(outcome = ?result, "Match ended");
            }
            None => self.phase = MatchPhase::RoundEnded,
        }
    }
}
