//! Match session owner.
//!
//! `MatchScorer` keeps the one live [`MatchState`], the roster it was started
//! with and a clock, and swaps in the result of each accepted transition.

use chrono::TimeDelta;
use tracing::{debug, info};

use super::{Clock, MatchPhase, MatchState, Refusal, SystemClock};
use crate::models::{MatchConfig, MatchRules, TeamId};

#[derive(Debug)]
pub struct MatchScorer<C = SystemClock> {
    clock: C,
    /// Rules a reset falls back to.
    default_rules: MatchRules,
    config: Option<MatchConfig>,
    state: MatchState,
}

impl Default for MatchScorer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchScorer<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> MatchScorer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            default_rules: MatchRules::default(),
            config: None,
            state: MatchState::default(),
        }
    }

    /// Rules used for the setup state now and after every reset.
    pub fn with_default_rules(mut self, rules: MatchRules) -> Self {
        self.default_rules = rules;
        if self.state.phase() == MatchPhase::Setup {
            self.state = MatchState::setup(rules);
        }
        self
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Roster and rules of the current match; `None` until a start is accepted.
    pub fn config(&self) -> Option<&MatchConfig> {
        self.config.as_ref()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn can_score_point(&self) -> bool {
        self.state.can_score_point()
    }

    pub fn winner(&self) -> Option<TeamId> {
        self.state.winner()
    }

    pub fn elapsed(&self) -> Option<TimeDelta> {
        self.state.elapsed(self.clock.now())
    }

    pub fn start(&mut self, config: MatchConfig) -> Result<&MatchState, Refusal> {
        let next = self
            .state
            .start(&config, self.clock.now())
            .inspect_err(|refusal| debug!(%refusal, "start refused"))?;

        info!(
            mode = %config.rules.players_mode,
            target = config.rules.target.points(),
            "match started"
        );
        self.config = Some(config);
        self.state = next;
        Ok(&self.state)
    }

    pub fn score_point(&mut self, team: TeamId) -> Result<&MatchState, Refusal> {
        let before = self.state.serve();
        let next = self
            .state
            .score_point(team, self.clock.now())
            .inspect_err(|refusal| debug!(%refusal, %team, "point refused"))?;

        let (team1, team2) = next.scores();
        let serve = next.serve();
        debug!(
            %team,
            team1,
            team2,
            serving_team = serve.team.number(),
            serving_player = serve.player.number(),
            side_out = serve.team != before.team,
            "point scored"
        );
        if let Some(winner) = next.winner() {
            info!(%winner, team1, team2, "match finished");
        }

        self.state = next;
        Ok(&self.state)
    }

    pub fn pause_resume(&mut self) -> Result<&MatchState, Refusal> {
        let next = self
            .state
            .pause_resume()
            .inspect_err(|refusal| debug!(%refusal, "pause/resume refused"))?;

        debug!(phase = %next.phase(), "pause toggled");
        self.state = next;
        Ok(&self.state)
    }

    /// Discard the current match. Always succeeds.
    pub fn reset(&mut self) -> &MatchState {
        if self.state.phase().is_started() {
            info!(phase = %self.state.phase(), "match reset");
        }
        self.config = None;
        self.state = MatchState::setup(self.default_rules);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ManualClock, Serve};
    use crate::models::{GameTarget, MatchEvent, PlayersMode};
    use chrono::{TimeZone, Utc};

    fn scorer() -> MatchScorer<ManualClock> {
        MatchScorer::with_clock(ManualClock::new(
            Utc.with_ymd_and_hms(2026, 5, 2, 18, 30, 0).unwrap(),
        ))
    }

    #[test]
    fn test_full_singles_game() {
        let mut scorer = scorer();
        scorer.start(MatchConfig::singles("Ana", "Ben")).unwrap();

        for _ in 0..10 {
            scorer.score_point(TeamId::One).unwrap();
        }
        scorer.clock().advance(TimeDelta::seconds(65));
        assert_eq!(scorer.elapsed(), Some(TimeDelta::seconds(65)));

        scorer.score_point(TeamId::One).unwrap();
        assert_eq!(scorer.state().phase(), MatchPhase::Finished);
        assert_eq!(scorer.winner(), Some(TeamId::One));
        assert!(!scorer.can_score_point());
        assert_eq!(scorer.elapsed(), None);
        assert_eq!(scorer.state().duration(), Some(TimeDelta::seconds(65)));
    }

    #[test]
    fn test_refusal_leaves_state_untouched() {
        let mut scorer = scorer();
        scorer.start(MatchConfig::singles("Ana", "Ben")).unwrap();
        for _ in 0..11 {
            scorer.score_point(TeamId::Two).unwrap();
        }
        let before = scorer.state().clone();

        assert_eq!(scorer.score_point(TeamId::One), Err(Refusal::MatchFinished));
        assert_eq!(scorer.pause_resume(), Err(Refusal::MatchFinished));
        assert_eq!(scorer.state(), &before);
    }

    #[test]
    fn test_failed_start_keeps_setup() {
        let mut scorer = scorer();
        let mut config = MatchConfig::doubles(("Ana", "Ben"), ("Cy", "Di"));
        config.team1.player2 = Some(String::new());

        assert_eq!(
            scorer.start(config),
            Err(Refusal::IncompleteRoster { team: TeamId::One, slot: 2 })
        );
        assert_eq!(scorer.state(), &MatchState::default());
        assert!(scorer.config().is_none());
    }

    #[test]
    fn test_reset_from_every_phase() {
        let config = MatchConfig::doubles(("Ana", "Ben"), ("Cy", "Di"));

        let mut scorer = scorer();
        assert_eq!(scorer.reset(), &MatchState::default());

        scorer.start(config.clone()).unwrap();
        scorer.score_point(TeamId::Two).unwrap();
        assert_eq!(scorer.reset(), &MatchState::default());

        scorer.start(config.clone()).unwrap();
        scorer.pause_resume().unwrap();
        assert_eq!(scorer.reset(), &MatchState::default());

        scorer.start(config).unwrap();
        while scorer.can_score_point() {
            scorer.score_point(TeamId::One).unwrap();
        }
        let fresh = scorer.reset().clone();
        assert_eq!(fresh, MatchState::default());
        assert_eq!(fresh.serve(), Serve::OPENING);
        assert!(fresh.started_at().is_none());
        assert!(scorer.config().is_none());
    }

    #[test]
    fn test_reset_restores_default_rules() {
        let rules = MatchRules::new(PlayersMode::Singles, GameTarget::TwentyOne);
        let mut scorer = scorer().with_default_rules(rules);
        assert_eq!(scorer.state().rules(), rules);

        scorer
            .start(MatchConfig::doubles(("Ana", "Ben"), ("Cy", "Di")).with_target(GameTarget::Eleven))
            .unwrap();
        assert_eq!(scorer.state().rules().target, GameTarget::Eleven);

        scorer.reset();
        assert_eq!(scorer.state().rules(), rules);
    }

    #[test]
    fn test_pause_blocks_scoring_until_resumed() {
        let mut scorer = scorer();
        scorer.start(MatchConfig::singles("Ana", "Ben")).unwrap();
        scorer.pause_resume().unwrap();
        assert!(scorer.score_point(TeamId::One).is_err());

        scorer.pause_resume().unwrap();
        scorer.score_point(TeamId::One).unwrap();

        let log: Vec<String> = scorer.state().event_log().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            log,
            vec!["Team 1 scores! (1-0)", "Game resumed", "Game paused", "Game started!"]
        );
        assert_eq!(scorer.state().event_log().last(), Some(&MatchEvent::Started));
    }
}
