//! Metrics projection
//!
//! Read-only aggregation over a player's completed matches: record, sets, games,
//! streaks, recent form and the PASALA Index.

use pasala_core::{DomainError, PlayedMatch, PlayerId};
use tracing::instrument;

use crate::dto::PlayerMetricsResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Results considered for recent form
pub const FORM_WINDOW: usize = 5;

/// Matches after which the index is fully trusted
pub const CONFIDENCE_MATCHES: u32 = 10;

/// Metrics service
pub struct MetricsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MetricsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn player_metrics(&self, player_id: PlayerId) -> ServiceResult<PlayerMetricsResponse> {
        self.ctx
            .player_repo()
            .find_by_id(player_id)
            .await?
            .ok_or(DomainError::PlayerNotFound(player_id))?;

        let history = self.ctx.result_repo().history_for_player(player_id).await?;
        Ok(project(player_id, &history))
    }
}

/// Fold a history (most recent first) into metrics
pub fn project(player_id: PlayerId, history: &[PlayedMatch]) -> PlayerMetricsResponse {
    let played = history.len() as u32;
    let wins = history.iter().filter(|m| m.won()).count() as u32;
    let losses = played - wins;

    let mut sets_won = 0u32;
    let mut sets_lost = 0u32;
    let mut games_won = 0i64;
    let mut games_lost = 0i64;
    for m in history {
        sets_won += m.result.sets_won(m.team) as u32;
        sets_lost += m.result.sets_won(m.team.opponent()) as u32;
        games_won += m.result.games_won(m.team);
        games_lost += m.result.games_won(m.team.opponent());
    }

    let recent: Vec<bool> = history.iter().take(FORM_WINDOW).map(PlayedMatch::won).collect();
    let recent_form: String = recent.iter().map(|&w| if w { 'W' } else { 'L' }).collect();

    PlayerMetricsResponse {
        player_id,
        matches_played: played,
        wins,
        losses,
        win_rate: if played == 0 { 0.0 } else { f64::from(wins) / f64::from(played) },
        sets_won,
        sets_lost,
        games_won,
        games_lost,
        current_streak: current_streak(history),
        best_win_streak: best_win_streak(history),
        recent_form,
        pasala_index: pasala_index(played, wins, sets_won, sets_lost, &recent),
    }
}

/// Signed run at the head of the history: positive wins, negative losses
fn current_streak(history: &[PlayedMatch]) -> i32 {
    let Some(first) = history.first() else {
        return 0;
    };
    let won = first.won();
    let run = history.iter().take_while(|m| m.won() == won).count() as i32;
    if won {
        run
    } else {
        -run
    }
}

fn best_win_streak(history: &[PlayedMatch]) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    for m in history {
        if m.won() {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

/// PASALA Index in `0..=100`.
///
/// Blends a smoothed win rate, the set ratio and recent form, then shrinks the
/// blend toward 50 until the player has `CONFIDENCE_MATCHES` matches.
pub fn pasala_index(played: u32, wins: u32, sets_won: u32, sets_lost: u32, recent: &[bool]) -> u8 {
    let smoothed = f64::from(wins + 1) / f64::from(played + 2);
    let set_ratio = if sets_won + sets_lost == 0 {
        0.5
    } else {
        f64::from(sets_won) / f64::from(sets_won + sets_lost)
    };
    let form = if recent.is_empty() {
        0.5
    } else {
        recent.iter().filter(|&&w| w).count() as f64 / recent.len() as f64
    };
    let confidence = f64::from(played.min(CONFIDENCE_MATCHES)) / f64::from(CONFIDENCE_MATCHES);

    let raw = 0.5 * smoothed + 0.3 * set_ratio + 0.2 * form;
    let index = (100.0 * (0.5 + (raw - 0.5) * confidence)).round();
    index.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use pasala_core::{AccountId, MatchFormat, MatchId, MatchResult, SetScore, Team};

    /// History entry `days_ago` old where the player on `team` won or lost in straight sets
    fn played(days_ago: i64, team: Team, won: bool) -> PlayedMatch {
        let sets = if (team == Team::A) == won {
            vec![SetScore::new(6, 3), SetScore::new(6, 4)]
        } else {
            vec![SetScore::new(3, 6), SetScore::new(4, 6)]
        };
        let match_id = MatchId::new();
        PlayedMatch {
            match_id,
            scheduled_at: Utc::now() - Duration::days(days_ago),
            team,
            result: MatchResult::decide(match_id, sets, MatchFormat::default(), AccountId::new())
                .unwrap(),
        }
    }

    #[test]
    fn test_empty_history_is_neutral() {
        let metrics = project(PlayerId::new(), &[]);
        assert_eq!(metrics.matches_played, 0);
        assert_eq!(metrics.current_streak, 0);
        assert_eq!(metrics.recent_form, "");
        assert_eq!(metrics.pasala_index, 50);
        assert!(metrics.win_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_and_streaks() {
        // Most recent first: W W L W W W L
        let history = vec![
            played(1, Team::A, true),
            played(2, Team::B, true),
            played(3, Team::A, false),
            played(4, Team::B, true),
            played(5, Team::A, true),
            played(6, Team::A, true),
            played(7, Team::B, false),
        ];
        let metrics = project(PlayerId::new(), &history);

        assert_eq!(metrics.matches_played, 7);
        assert_eq!(metrics.wins, 5);
        assert_eq!(metrics.losses, 2);
        assert_eq!(metrics.current_streak, 2);
        assert_eq!(metrics.best_win_streak, 3);
        assert_eq!(metrics.recent_form, "WWLWW");
        assert_eq!(metrics.sets_won, 10);
        assert_eq!(metrics.sets_lost, 4);
        assert_eq!(metrics.games_won, 5 * 12 + 2 * 7);
        assert_eq!(metrics.games_lost, 5 * 7 + 2 * 12);
    }

    #[test]
    fn test_losing_streak_is_negative() {
        let history = vec![
            played(1, Team::A, false),
            played(2, Team::A, false),
            played(3, Team::A, true),
        ];
        assert_eq!(project(PlayerId::new(), &history).current_streak, -2);
    }

    #[test]
    fn test_index_shrinks_toward_fifty_with_few_matches() {
        // One win: smoothed 2/3, set ratio 1, form 1, raw 0.8333, confidence 0.1
        assert_eq!(pasala_index(1, 1, 2, 0, &[true]), 53);
        // Ten straight-set wins: smoothed 11/12, raw 0.9583, full confidence
        assert_eq!(pasala_index(10, 10, 20, 0, &[true; 5]), 96);
        // Ten straight-set losses: smoothed 1/12, raw 0.0417
        assert_eq!(pasala_index(10, 0, 0, 20, &[false; 5]), 4);
    }

    #[test]
    fn test_index_stays_in_range() {
        for played in 0..30u32 {
            for wins in 0..=played {
                let index = pasala_index(played, wins, wins * 2, (played - wins) * 2, &[]);
                assert!(index <= 100);
            }
        }
    }
}
