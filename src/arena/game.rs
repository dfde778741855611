//! The match engine: draw, resolve, score, step the progress stack.

use tracing::{debug, info};

use crate::core::{Agent, ChoiceSource, ConfigError, GameRng, MatchConfig, Side, SideMap};
use crate::progress::ProgressStack;
use crate::rules::{duel, RoundOutcome};

use super::{MatchState, MatchStats, RoundReport};

/// A two-agent match driven one round at a time.
///
/// Generic over the choice source so tests can script every draw. Both
/// agents draw from the same source, A first.
///
/// ## Example
///
/// ```
/// use rps_arena::arena::Match;
/// use rps_arena::core::{Choice, MatchConfig, ScriptedChoices};
///
/// let script = ScriptedChoices::rounds([(Choice::Rock, Choice::Scissors)]);
/// let mut game = Match::with_source(MatchConfig::default(), script).unwrap();
///
/// let report = game.play_round();
/// assert_eq!(report.outcome.winner(), Some("AI 1"));
/// assert_eq!((report.score_a, report.score_b), (1, 0));
/// assert_eq!(report.stack.len(), 1);
/// ```
pub struct Match<S: ChoiceSource = GameRng> {
    config: MatchConfig,
    state: MatchState,
    stats: MatchStats,
    source: S,
}

impl Match<GameRng> {
    /// Create a match drawing from a `GameRng`, seeded from the config or
    /// from OS entropy when no seed is set.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_source(config, rng)
    }
}

impl<S: ChoiceSource> Match<S> {
    /// Create a match with an explicit choice source.
    pub fn with_source(config: MatchConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = MatchState::new(&config.names);
        Ok(Self {
            config,
            state,
            stats: MatchStats::new(),
            source,
        })
    }

    /// Advance the match by exactly one round.
    pub fn play_round(&mut self) -> RoundReport {
        let choice_a = self.source.draw();
        let choice_b = self.source.draw();
        let choices = SideMap::new(choice_a, choice_b);

        for (side, agent) in self.state.agents.iter_mut() {
            agent.record_choice(choices[side]);
        }

        let winner = duel(choice_a, choice_b);
        let outcome = RoundOutcome::from_winner(
            winner,
            self.state.agents[Side::A].name(),
            self.state.agents[Side::B].name(),
        );
        if let Some(side) = winner {
            self.state.agents[side].record_win();
        }

        let change = self.state.stack.step(self.state.score_delta());
        self.state.round += 1;

        let scores = self.state.scores();
        let report = RoundReport {
            round: self.state.round,
            choice_a,
            choice_b,
            outcome,
            winner,
            score_a: scores[Side::A],
            score_b: scores[Side::B],
            stack: self.state.stack.clone(),
            change,
        };
        self.stats.record(&report);

        debug!(
            round = report.round,
            %choice_a,
            %choice_b,
            outcome = %report.outcome,
            score_a = report.score_a,
            score_b = report.score_b,
            tiers = report.stack.len(),
            "round played"
        );
        report
    }

    /// Play `rounds` rounds back to back, returning every report.
    pub fn play_rounds(&mut self, rounds: usize) -> Vec<RoundReport> {
        (0..rounds).map(|_| self.play_round()).collect()
    }

    /// Reinitialize to `(0, 0, [])`.
    ///
    /// The choice source is left as is, so draws continue where they were.
    pub fn reset_match(&mut self) {
        info!(rounds = self.state.round, "match reset");
        self.state.reset();
        self.stats.reset();
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    #[must_use]
    pub fn agent(&self, side: Side) -> &Agent {
        &self.state.agents[side]
    }

    #[must_use]
    pub fn scores(&self) -> SideMap<u32> {
        self.state.scores()
    }

    #[must_use]
    pub fn stack(&self) -> &ProgressStack {
        &self.state.stack
    }
}

impl<S: ChoiceSource> std::fmt::Debug for Match<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Choice, ScriptedChoices};
    use crate::progress::{StackChange, Tier};

    fn scripted(rounds: &[(Choice, Choice)]) -> Match<ScriptedChoices> {
        Match::with_source(
            MatchConfig::default(),
            ScriptedChoices::rounds(rounds.iter().copied()),
        )
        .unwrap()
    }

    #[test]
    fn test_a_wins_round() {
        let mut game = scripted(&[(Choice::Paper, Choice::Rock)]);
        let report = game.play_round();

        assert_eq!(report.round, 1);
        assert_eq!(report.outcome, RoundOutcome::Winner("AI 1".to_string()));
        assert_eq!(report.winner, Some(Side::A));
        assert_eq!(report.change, StackChange::Grew(Tier::Star));
        assert_eq!(game.agent(Side::A).last_choice(), Some(Choice::Paper));
        assert_eq!(game.agent(Side::B).last_choice(), Some(Choice::Rock));
    }

    #[test]
    fn test_tie_changes_nothing() {
        let mut game = scripted(&[(Choice::Scissors, Choice::Scissors)]);
        let report = game.play_round();

        assert!(report.outcome.is_tie());
        assert_eq!((report.score_a, report.score_b), (0, 0));
        assert_eq!(report.change, StackChange::Unchanged);
        assert_eq!(game.stats().ties, 1);
    }

    #[test]
    fn test_b_lead_shrinks_stack() {
        let mut game = scripted(&[
            (Choice::Rock, Choice::Scissors),
            (Choice::Rock, Choice::Paper),
            (Choice::Rock, Choice::Paper),
        ]);

        let reports = game.play_rounds(3);
        let lens: Vec<_> = reports.iter().map(|r| r.stack.len()).collect();
        // 1-0 grow, 1-1 level, 1-2 shrink
        assert_eq!(lens, vec![1, 1, 0]);
        assert_eq!(reports[2].change, StackChange::Shrank(Tier::Star));
    }

    #[test]
    fn test_reset_match() {
        let mut game = scripted(&[(Choice::Rock, Choice::Scissors)]);
        game.play_rounds(4);
        assert_eq!(game.scores(), SideMap::new(4, 0));

        game.reset_match();

        assert_eq!(game.scores(), SideMap::new(0, 0));
        assert!(game.stack().is_empty());
        assert_eq!(game.state().round, 0);
        assert_eq!(game.stats().rounds, 0);
        assert_eq!(game.agent(Side::A).last_choice(), None);

        let report = game.play_round();
        assert_eq!(report.round, 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MatchConfig::default().with_names("Same", "Same");
        let result = Match::with_source(config, ScriptedChoices::new([Choice::Rock]));
        assert!(matches!(result, Err(ConfigError::DuplicateName(_))));
    }

    #[test]
    fn test_seeded_match_is_deterministic() {
        let mut game1 = Match::new(MatchConfig::default().with_seed(42)).unwrap();
        let mut game2 = Match::new(MatchConfig::default().with_seed(42)).unwrap();
        assert_eq!(game1.play_rounds(50), game2.play_rounds(50));
    }
}
