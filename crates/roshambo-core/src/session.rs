//! Stateful match sessions over the pure round engine.
//!
//! `MatchSession` owns the tables, the mode, the running score, and the
//! opponent's choice source. Tables are built once at session start and
//! never change during play.

use crate::choice::ShorthandTable;
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::round::{ChoiceSource, RoundReport, UniformSource, play_round};
use crate::rules::Ruleset;
use crate::score::{GameMode, SessionResult, SessionScore};

/// Where a match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Neither party has reached the win target.
    InProgress,
    /// The challenger took the match.
    ChallengerWon,
    /// The opponent took the match.
    OpponentWon,
}

/// An interactive best-of-N match against a drawn opponent.
pub struct MatchSession {
    shorthand: ShorthandTable,
    rules: Ruleset,
    mode: GameMode,
    score: SessionScore,
    source: Box<dyn ChoiceSource>,
}

impl MatchSession {
    /// Create a session with the standard tables and a seeded uniform
    /// opponent.
    pub fn new(config: GameConfig) -> Self {
        Self::with_source(config, Box::new(UniformSource::new(config.seed)))
    }

    /// Create a session with a caller-supplied opponent source.
    pub fn with_source(config: GameConfig, source: Box<dyn ChoiceSource>) -> Self {
        Self {
            shorthand: ShorthandTable::standard(),
            rules: Ruleset::standard(),
            mode: config.mode,
            score: SessionScore::new(),
            source,
        }
    }

    /// The configured win target.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The current score.
    pub fn score(&self) -> SessionScore {
        self.score
    }

    /// The shorthand table in use.
    pub fn shorthand(&self) -> &ShorthandTable {
        &self.shorthand
    }

    /// The ruleset in use.
    pub fn rules(&self) -> &Ruleset {
        &self.rules
    }

    /// Where the match stands.
    pub fn state(&self) -> MatchState {
        match self.score.is_complete(self.mode) {
            None => MatchState::InProgress,
            Some(SessionResult::ChallengerWon) => MatchState::ChallengerWon,
            Some(SessionResult::OpponentWon) => MatchState::OpponentWon,
        }
    }

    /// Play one round from raw challenger input.
    ///
    /// Fails with [`GameError::MatchOver`] once the match is decided;
    /// call [`MatchSession::reset`] to start a new one.
    pub fn play(&mut self, raw: &str) -> GameResult<RoundReport> {
        if self.state() != MatchState::InProgress {
            return Err(GameError::MatchOver);
        }
        play_round(
            raw,
            &self.shorthand,
            &self.rules,
            self.source.as_mut(),
            &mut self.score,
            self.mode,
        )
    }

    /// Reset the score for a new match. The opponent source carries on
    /// from where it left off.
    pub fn reset(&mut self) {
        self.score.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::Choice;
    use crate::rules::RoundOutcome;

    struct Scripted(Vec<Choice>, usize);

    impl ChoiceSource for Scripted {
        fn draw(&mut self) -> Choice {
            let choice = self.0[self.1 % self.0.len()];
            self.1 += 1;
            choice
        }
    }

    fn scripted_session(target: u32, opponent: &[Choice]) -> MatchSession {
        let config = GameConfig::default().with_mode(GameMode::new(target).unwrap());
        MatchSession::with_source(config, Box::new(Scripted(opponent.to_vec(), 0)))
    }

    #[test]
    fn fresh_session_is_in_progress() {
        let session = MatchSession::new(GameConfig::default());
        assert_eq!(session.state(), MatchState::InProgress);
        assert_eq!(session.score(), SessionScore::new());
    }

    #[test]
    fn one_decisive_round_ends_a_first_to_one_match() {
        let mut session = scripted_session(1, &[Choice::Scissors]);
        let report = session.play("rock").unwrap();
        assert_eq!(report.session_result, Some(SessionResult::ChallengerWon));
        assert_eq!(session.state(), MatchState::ChallengerWon);
    }

    #[test]
    fn playing_a_decided_match_is_an_error() {
        let mut session = scripted_session(1, &[Choice::Scissors]);
        session.play("rock").unwrap();
        assert!(matches!(session.play("rock"), Err(GameError::MatchOver)));
    }

    #[test]
    fn reset_starts_a_new_match() {
        let mut session = scripted_session(1, &[Choice::Scissors]);
        session.play("rock").unwrap();
        session.reset();
        assert_eq!(session.state(), MatchState::InProgress);
        assert_eq!(session.score(), SessionScore::new());
        assert!(session.play("rock").is_ok());
    }

    #[test]
    fn invalid_input_leaves_the_session_untouched() {
        let mut session = scripted_session(3, &[Choice::Paper]);
        assert!(matches!(
            session.play("gibberish"),
            Err(GameError::InvalidChoice(_))
        ));
        assert_eq!(session.score(), SessionScore::new());
        assert_eq!(session.state(), MatchState::InProgress);
    }

    #[test]
    fn opponent_can_win_the_match() {
        // Paper covers rock, twice.
        let mut session = scripted_session(2, &[Choice::Paper]);
        session.play("rock").unwrap();
        let report = session.play("r").unwrap();
        assert_eq!(report.outcome, RoundOutcome::Loss);
        assert_eq!(report.session_result, Some(SessionResult::OpponentWon));
        assert_eq!(session.state(), MatchState::OpponentWon);
    }

    #[test]
    fn draws_prolong_the_match() {
        let mut session = scripted_session(1, &[Choice::Spock, Choice::Rock]);
        let report = session.play("spock").unwrap();
        assert_eq!(report.outcome, RoundOutcome::Draw);
        assert_eq!(session.state(), MatchState::InProgress);
        let report = session.play("paper").unwrap();
        assert_eq!(report.outcome, RoundOutcome::Win);
        assert_eq!(session.state(), MatchState::ChallengerWon);
    }

    #[test]
    fn seeded_sessions_replay_identically() {
        let config = GameConfig::default().with_seed(99);
        let mut a = MatchSession::new(config);
        let mut b = MatchSession::new(config);
        for _ in 0..20 {
            let ra = a.play("rock");
            let rb = b.play("rock");
            match (ra, rb) {
                (Ok(ra), Ok(rb)) => {
                    assert_eq!(ra.opponent, rb.opponent);
                    assert_eq!(ra.outcome, rb.outcome);
                }
                (Err(GameError::MatchOver), Err(GameError::MatchOver)) => break,
                other => panic!("sessions diverged: {other:?}"),
            }
        }
    }
}
