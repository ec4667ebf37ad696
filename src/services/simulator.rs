//! Load generator that drives traffic against the leaderboard API

use super::leaderboard::{
    models::{ApiResponse, SubmitScore, TopPlayersResponse, UserRankResponse},
    LeaderboardApi,
};
use crate::{
    config::{Config, PauseConfig, RangeConfig},
    utils::random::{self, Score, UserId},
};
use log::{debug, error, info, warn};
use rand::Rng;
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;

/// Repeatedly submits random scores for random users and reads back
/// the top players and the users rank. Every call is best effort,
/// failures are logged and never stop the loop
pub struct Simulator<A, R> {
    api: A,
    rng: R,
    user_ids: RangeConfig,
    scores: RangeConfig,
    pause: PauseConfig,
    /// Number of top player entries to display
    top_display: usize,
}

/// Outcome of a single iteration. The read values are only present
/// when the API reported success and they were displayed
#[derive(Debug)]
pub struct Iteration {
    pub user_id: UserId,
    pub score: Score,
    /// Whether the submit request reached the API
    pub submitted: bool,
    pub top_players: Option<Vec<Value>>,
    pub rank: Option<Value>,
    /// Pause to wait before the next iteration
    pub pause: Duration,
}

impl<A, R> Simulator<A, R>
where
    A: LeaderboardApi,
    R: Rng,
{
    pub fn new(api: A, rng: R, config: &Config) -> Self {
        Self {
            api,
            rng,
            user_ids: config.user_ids,
            scores: config.scores,
            pause: config.pause,
            top_display: config.top_display,
        }
    }

    /// Runs iterations forever pausing for a random duration
    /// between each of them
    pub async fn run(&mut self) {
        info!("starting load simulation...");
        loop {
            let iteration = self.iteration().await;
            debug!(
                "iteration for user {} with score {} complete (submitted: {}, top: {}, rank: {}), pausing for {:?}",
                iteration.user_id,
                iteration.score,
                iteration.submitted,
                iteration.top_players.is_some(),
                iteration.rank.is_some(),
                iteration.pause
            );
            sleep(iteration.pause).await;
        }
    }

    /// Performs a single submit, top players and rank round for a
    /// random user returning the pause to wait afterwards
    pub async fn iteration(&mut self) -> Iteration {
        let user_id = random::user_id(&mut self.rng, &self.user_ids);
        let (score, submitted) = self.submit_score(user_id).await;

        // Reads happen regardless of the submit outcome
        let top_players = self
            .get_top_players()
            .await
            .and_then(|response| successful(response, "top players"))
            .map(|players| {
                let shown: Vec<Value> = players.into_iter().take(self.top_display).collect();
                info!("top players: {}", Value::Array(shown.clone()));
                shown
            });

        let rank = self
            .get_user_rank(user_id)
            .await
            .and_then(|response| successful(response, "user rank"))
            .map(|rank| {
                info!("user {} rank: {}", user_id, rank);
                rank
            });

        let pause = random::pause(&mut self.rng, &self.pause);

        Iteration {
            user_id,
            score,
            submitted,
            top_players,
            rank,
            pause,
        }
    }

    /// Submits a random score for the user returning the score and
    /// whether the request reached the API
    pub async fn submit_score(&mut self, user_id: UserId) -> (Score, bool) {
        let score = random::score(&mut self.rng, &self.scores);
        let body = SubmitScore { user_id, score };

        match self.api.submit(&body).await {
            Ok(status) if status.is_success() => {
                info!("submitted score {} for user {}", score, user_id);
                (score, true)
            }
            Ok(status) => {
                warn!(
                    "submit of score {} for user {} responded with {}",
                    score, user_id, status
                );
                (score, true)
            }
            Err(err) => {
                error!("submit failed: {}", err);
                (score, false)
            }
        }
    }

    pub async fn get_top_players(&self) -> Option<TopPlayersResponse> {
        match self.api.top().await {
            Ok(value) => Some(value),
            Err(err) => {
                error!("get top failed: {}", err);
                None
            }
        }
    }

    pub async fn get_user_rank(&self, user_id: UserId) -> Option<UserRankResponse> {
        match self.api.rank(user_id).await {
            Ok(value) => Some(value),
            Err(err) => {
                error!("get rank failed: {}", err);
                None
            }
        }
    }
}

/// Extracts the data from a response that reported success, successful
/// responses without data have nothing to display
fn successful<T>(response: ApiResponse<T>, name: &str) -> Option<T> {
    match response.into_success() {
        Ok(Some(data)) => Some(data),
        Ok(None) => {
            debug!("{} response reported success without data", name);
            None
        }
        Err(message) => {
            debug!(
                "{} request was unsuccessful: {}",
                name,
                message.as_deref().unwrap_or("no error message")
            );
            None
        }
    }
}
