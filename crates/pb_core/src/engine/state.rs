//! Match state and its transitions.
//!
//! Every transition is a pure function: it reads `&self` and returns the next
//! state, or a [`Refusal`] when its precondition does not hold. Timestamps are
//! passed in so replays are deterministic.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use super::{MatchPhase, Refusal, Serve};
use crate::models::{MatchConfig, MatchEvent, MatchRules, ServingPlayer, TeamId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchState {
    rules: MatchRules,
    team1_score: u16,
    team2_score: u16,
    serving_team: TeamId,
    serving_player: ServingPlayer,
    phase: MatchPhase,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    /// Newest first.
    event_log: Vec<MatchEvent>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::setup(MatchRules::default())
    }
}

impl MatchState {
    /// Fresh setup-phase state: 0-0, team 1 / player 1 to serve, empty log.
    pub fn setup(rules: MatchRules) -> Self {
        Self {
            rules,
            team1_score: 0,
            team2_score: 0,
            serving_team: Serve::OPENING.team,
            serving_player: Serve::OPENING.player,
            phase: MatchPhase::Setup,
            started_at: None,
            finished_at: None,
            event_log: Vec::new(),
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn rules(&self) -> MatchRules {
        self.rules
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn score(&self, team: TeamId) -> u16 {
        match team {
            TeamId::One => self.team1_score,
            TeamId::Two => self.team2_score,
        }
    }

    /// `(team1, team2)`
    pub fn scores(&self) -> (u16, u16) {
        (self.team1_score, self.team2_score)
    }

    pub fn serve(&self) -> Serve {
        Serve { team: self.serving_team, player: self.serving_player }
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    pub fn event_log(&self) -> &[MatchEvent] {
        &self.event_log
    }

    // ========================
    // Derived state
    // ========================

    /// False once either side has reached the target with a two-point lead.
    ///
    /// Depends only on the scores and target, never on the phase.
    pub fn can_score_point(&self) -> bool {
        self.winner().is_none()
    }

    /// The side that has met the win condition, if any.
    pub fn winner(&self) -> Option<TeamId> {
        TeamId::ALL
            .into_iter()
            .find(|&team| self.rules.is_winning(self.score(team), self.score(team.opponent())))
    }

    /// Time since start, only while the match clock is running.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        if !self.phase.is_clock_running() {
            return None;
        }
        self.started_at.map(|started| now - started)
    }

    /// Start-to-finish span of a completed match.
    pub fn duration(&self) -> Option<TimeDelta> {
        match (self.started_at, self.finished_at) {
            (Some(started), Some(finished)) => Some(finished - started),
            _ => None,
        }
    }

    // ========================
    // Transitions
    // ========================

    /// `setup -> in_progress`.
    pub fn start(&self, config: &MatchConfig, now: DateTime<Utc>) -> Result<MatchState, Refusal> {
        if self.phase != MatchPhase::Setup {
            return Err(Refusal::AlreadyStarted { phase: self.phase });
        }
        if let Some((team, slot)) = config.missing_slot() {
            return Err(Refusal::IncompleteRoster { team, slot });
        }

        let mut next = MatchState::setup(config.rules);
        next.phase = MatchPhase::InProgress;
        next.started_at = Some(now);
        next.event_log.push(MatchEvent::Started);
        Ok(next)
    }

    /// Award one rally to `team`.
    ///
    /// The win check runs on the new score before the serve moves, and the
    /// serve only moves when the receiving side scored.
    pub fn score_point(&self, team: TeamId, now: DateTime<Utc>) -> Result<MatchState, Refusal> {
        if self.phase.is_match_ended() {
            return Err(Refusal::MatchFinished);
        }
        if !self.can_score_point() {
            return Err(Refusal::GameDecided {
                team1_score: self.team1_score,
                team2_score: self.team2_score,
            });
        }
        if self.phase != MatchPhase::InProgress {
            return Err(Refusal::NotInProgress { phase: self.phase });
        }

        let score = self.score(team);
        let Some(raised) = score.checked_add(1) else {
            return Err(Refusal::ScoreLimit { team, score });
        };

        let mut next = self.clone();
        match team {
            TeamId::One => next.team1_score = raised,
            TeamId::Two => next.team2_score = raised,
        }

        if next.winner().is_some() {
            next.phase = MatchPhase::Finished;
            next.finished_at = Some(now);
        }

        let (serve, _) = self.serve().after_point(team, self.rules.players_mode);
        next.serving_team = serve.team;
        next.serving_player = serve.player;

        next.event_log.insert(
            0,
            MatchEvent::PointScored {
                team,
                team1_score: next.team1_score,
                team2_score: next.team2_score,
            },
        );
        Ok(next)
    }

    /// `in_progress <-> paused`.
    pub fn pause_resume(&self) -> Result<MatchState, Refusal> {
        let (phase, event) = match self.phase {
            MatchPhase::InProgress => (MatchPhase::Paused, MatchEvent::Paused),
            MatchPhase::Paused => (MatchPhase::InProgress, MatchEvent::Resumed),
            MatchPhase::Setup => return Err(Refusal::NotStarted),
            MatchPhase::Finished => return Err(Refusal::MatchFinished),
        };

        let mut next = self.clone();
        next.phase = phase;
        next.event_log.insert(0, event);
        Ok(next)
    }
}
