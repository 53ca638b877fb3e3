//! The interactive match loop.
//!
//! Drives a [`MatchController`] with answers read from the console and
//! moves from the [`MoveSelector`]. All rules live in the core; this module
//! only sequences prompts and messages.

use crate::render::draw_board;
use crate::{Console, ShellConfig, ShellError};
use std::io::{BufRead, Write};
use strictly_match::{
    MatchController, MatchOutcome, MatchSetup, MoveSelector, RoundOutcome, Side, WINNING_SCORE,
};
use tracing::{info, instrument};

/// One interactive match.
pub struct Session<R, W> {
    console: Console<R, W>,
    config: ShellConfig,
    selector: MoveSelector,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session; the config's seed, if any, pins the computer's
    /// random moves.
    pub fn new(console: Console<R, W>, config: ShellConfig) -> Self {
        let selector = match config.seed() {
            Some(seed) => MoveSelector::seeded(*seed),
            None => MoveSelector::from_entropy(),
        };
        Self {
            console,
            config,
            selector,
        }
    }

    /// Consumes the session, returning the console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Plays rounds until someone reaches the winning score or the player
    /// stops.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<MatchOutcome, ShellError> {
        self.display_welcome()?;
        let mut game = self.set_up()?;

        loop {
            self.display_board(&game)?;
            self.play_round(&mut game)?;
            self.display_result(&game)?;

            if game.is_match_over() {
                break;
            }
            if !self.console.ask_play_again(WINNING_SCORE)? {
                game.abandon();
                break;
            }
            game.next_round()?;
            self.console.clear()?;
            self.console.say("Let's play again!")?;
            self.console.say("")?;
        }

        self.display_final_result(&game)?;
        self.console
            .say("Thanks for playing Tic Tac Toe! Goodbye!")?;
        info!(outcome = ?game.match_outcome(), "Session finished");
        Ok(game.match_outcome())
    }

    fn set_up(&mut self) -> Result<MatchController, ShellError> {
        let human_marker = match *self.config.human_marker() {
            Some(marker) => marker,
            None => self.console.ask_marker(
                "What single-character marker would you like to use?",
                *self.config.opponent_marker(),
            )?,
        };
        let opponent_marker = match *self.config.opponent_marker() {
            Some(marker) => marker,
            None => self.console.ask_marker(
                "What single-character marker would you like the computer to use?",
                Some(human_marker),
            )?,
        };
        let human_name = match self.config.human_name() {
            Some(name) => name.clone(),
            None => self.console.ask_name(
                "What name would you like to use?",
                self.config.opponent_name().as_deref(),
            )?,
        };
        let opponent_name = match self.config.opponent_name() {
            Some(name) => name.clone(),
            None => self.console.ask_name(
                "What name would you like the computer to use?",
                Some(human_name.as_str()),
            )?,
        };

        let mut setup = MatchSetup::new();
        setup.set_markers(human_marker, opponent_marker)?;
        setup.set_names(&human_name, &opponent_name)?;
        Ok(setup.start()?)
    }

    fn play_round(&mut self, game: &mut MatchController) -> Result<(), ShellError> {
        loop {
            match game.active_side() {
                None => {
                    let side = match *self.config.first_mover() {
                        Some(side) => side,
                        None => {
                            self.console.clear()?;
                            self.console.ask_first_mover(
                                game.human().name(),
                                game.opponent().name(),
                            )?
                        }
                    };
                    game.choose_first_mover(side)?;
                }
                Some(Side::Human) => {
                    let pos = self.console.ask_move(game.board())?;
                    game.play_human_turn(pos)?;
                }
                Some(Side::Opponent) => {
                    game.play_opponent_turn(&mut self.selector)?;
                }
            }

            if game.is_round_over() {
                return Ok(());
            }
            if game.active_side() == Some(Side::Human) {
                self.console.clear()?;
                self.display_board(game)?;
            }
        }
    }

    fn display_welcome(&mut self) -> Result<(), ShellError> {
        self.console.clear()?;
        self.console.say("Welcome to Tic Tac Toe!")?;
        self.console.say(format!(
            "It takes {} round wins to win the game.",
            WINNING_SCORE
        ))?;
        self.console.say("")
    }

    fn display_board(&mut self, game: &MatchController) -> Result<(), ShellError> {
        let (human, opponent) = (game.human(), game.opponent());
        self.console
            .say(format!("{} you're a {}.", human.name(), human.marker()))?;
        self.console
            .say(format!("{} is a {}.", opponent.name(), opponent.marker()))?;
        self.console.say("")?;
        self.console.say(draw_board(game.board()))?;
        self.console.say("")
    }

    fn display_result(&mut self, game: &MatchController) -> Result<(), ShellError> {
        self.display_board(game)?;
        match game.round_outcome() {
            RoundOutcome::Won(side) => self
                .console
                .say(format!("{} won this round!", game.player(side).name()))?,
            RoundOutcome::Tied | RoundOutcome::Ongoing => {
                self.console.say("It's a tie this round!")?
            }
        }
        let scores = game.current_scores();
        self.console.say(format!(
            "{} has won {} times.",
            game.human().name(),
            scores.human
        ))?;
        self.console.say(format!(
            "{} has won {} times.",
            game.opponent().name(),
            scores.opponent
        ))?;
        self.console.say("")
    }

    fn display_final_result(&mut self, game: &MatchController) -> Result<(), ShellError> {
        if let Some(side) = game.match_outcome().winner() {
            self.console.say(format!(
                "{} has won the entire game.",
                game.player(side).name()
            ))?;
        }
        Ok(())
    }
}
