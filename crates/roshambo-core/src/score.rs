//! Session scoring: win targets, running scores, and match completion.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::rules::RoundOutcome;

/// The number of round wins a party needs to take the match.
///
/// The value is the raw target: a mode of 3 ends the match when either
/// party reaches 3 wins, and "best_of_3" names that same target rather
/// than the colloquial first-to-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMode {
    target: u32,
}

impl GameMode {
    /// Create a mode with the given win target. Zero is rejected: it
    /// would be satisfied before any round is played.
    pub fn new(target: u32) -> GameResult<Self> {
        if target == 0 {
            return Err(GameError::InvalidMode("0".to_string()));
        }
        Ok(Self { target })
    }

    /// Parse a mode from user input.
    ///
    /// Accepts a bare number ("3") or a named mode ("best_of_3",
    /// "best-of-5"), where the number is the win target itself.
    pub fn parse(s: &str) -> GameResult<Self> {
        let text = s.trim().to_lowercase().replace('-', "_");
        let digits = text.strip_prefix("best_of_").unwrap_or(&text);
        let target = digits
            .parse::<u32>()
            .map_err(|_| GameError::InvalidMode(s.trim().to_string()))?;
        Self::new(target)
    }

    /// The win target.
    pub fn target(self) -> u32 {
        self.target
    }
}

impl Default for GameMode {
    /// A single decisive round ends the match.
    fn default() -> Self {
        Self { target: 1 }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "first to {}", self.target)
    }
}

/// Round wins accumulated by each party during one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionScore {
    challenger: u32,
    opponent: u32,
}

impl SessionScore {
    /// A fresh 0-0 score.
    pub fn new() -> Self {
        Self::default()
    }

    /// The challenger's round wins.
    pub fn challenger(self) -> u32 {
        self.challenger
    }

    /// The opponent's round wins.
    pub fn opponent(self) -> u32 {
        self.opponent
    }

    /// Record one round outcome. Draws change nothing.
    pub fn apply(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Win => self.challenger += 1,
            RoundOutcome::Loss => self.opponent += 1,
            RoundOutcome::Draw => {}
        }
    }

    /// Whether either party has reached the mode's win target.
    pub fn is_complete(self, mode: GameMode) -> Option<SessionResult> {
        if self.challenger >= mode.target() {
            Some(SessionResult::ChallengerWon)
        } else if self.opponent >= mode.target() {
            Some(SessionResult::OpponentWon)
        } else {
            None
        }
    }

    /// Reset to 0-0 for a new session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Which party took the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionResult {
    /// The challenger reached the win target first.
    ChallengerWon,
    /// The opponent reached the win target first.
    OpponentWon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_rejects_zero() {
        assert!(matches!(GameMode::new(0), Err(GameError::InvalidMode(_))));
        assert_eq!(GameMode::new(3).unwrap().target(), 3);
    }

    #[test]
    fn mode_parse_variants() {
        assert_eq!(GameMode::parse("3").unwrap().target(), 3);
        assert_eq!(GameMode::parse("best_of_3").unwrap().target(), 3);
        assert_eq!(GameMode::parse("best-of-5").unwrap().target(), 5);
        assert_eq!(GameMode::parse(" BEST_OF_1 ").unwrap().target(), 1);
    }

    #[test]
    fn mode_parse_rejects_garbage() {
        assert!(GameMode::parse("abc").is_err());
        assert!(GameMode::parse("best_of_").is_err());
        assert!(GameMode::parse("best_of_0").is_err());
        assert!(GameMode::parse("-3").is_err());
        assert!(GameMode::parse("").is_err());
    }

    #[test]
    fn mode_display() {
        assert_eq!(GameMode::new(3).unwrap().to_string(), "first to 3");
        assert_eq!(GameMode::default().to_string(), "first to 1");
    }

    #[test]
    fn fresh_score_is_never_complete() {
        let score = SessionScore::new();
        for target in 1..=10 {
            let mode = GameMode::new(target).unwrap();
            assert_eq!(score.is_complete(mode), None);
        }
    }

    #[test]
    fn draw_changes_nothing() {
        let mut score = SessionScore::new();
        score.apply(RoundOutcome::Draw);
        assert_eq!((score.challenger(), score.opponent()), (0, 0));
    }

    #[test]
    fn scenario_first_to_three() {
        // [win, loss, draw, win, win] ends the session on the fifth round.
        let mode = GameMode::new(3).unwrap();
        let outcomes = [
            RoundOutcome::Win,
            RoundOutcome::Loss,
            RoundOutcome::Draw,
            RoundOutcome::Win,
            RoundOutcome::Win,
        ];
        let expected = [(1, 0), (1, 1), (1, 1), (2, 1), (3, 1)];

        let mut score = SessionScore::new();
        for (i, outcome) in outcomes.iter().enumerate() {
            score.apply(*outcome);
            assert_eq!((score.challenger(), score.opponent()), expected[i]);
            if i < outcomes.len() - 1 {
                assert_eq!(score.is_complete(mode), None);
            }
        }
        assert_eq!(score.is_complete(mode), Some(SessionResult::ChallengerWon));
    }

    #[test]
    fn opponent_can_take_the_match() {
        let mode = GameMode::new(2).unwrap();
        let mut score = SessionScore::new();
        score.apply(RoundOutcome::Loss);
        score.apply(RoundOutcome::Loss);
        assert_eq!(score.is_complete(mode), Some(SessionResult::OpponentWon));
    }

    #[test]
    fn counts_never_decrease() {
        let mut score = SessionScore::new();
        let outcomes = [
            RoundOutcome::Win,
            RoundOutcome::Draw,
            RoundOutcome::Loss,
            RoundOutcome::Win,
        ];
        let mut prev = (0, 0);
        for outcome in outcomes {
            score.apply(outcome);
            let now = (score.challenger(), score.opponent());
            assert!(now.0 >= prev.0 && now.1 >= prev.1);
            prev = now;
        }
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut score = SessionScore::new();
        score.apply(RoundOutcome::Win);
        score.apply(RoundOutcome::Loss);
        score.reset();
        assert_eq!(score, SessionScore::new());
        for target in 1..=5 {
            let mode = GameMode::new(target).unwrap();
            assert_eq!(score.is_complete(mode), None);
        }
    }

    #[test]
    fn round_trip_serde() {
        let mut score = SessionScore::new();
        score.apply(RoundOutcome::Win);
        let json = serde_json::to_string(&score).unwrap();
        let back: SessionScore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, score);
    }
}
