//! Scoring service client.

use super::games::{EightQueens, SnakeLadder, Traffic, TowerOfHanoi, TravelingSalesman};
use super::{ArcadeConfig, Comparison, GameId, GameKind, Puzzle, RemoteError};
use arcade_hanoi::{HanoiAnswer, HanoiSeed, HanoiStart, HanoiVerdict, PegCount};
use arcade_ladder::{
    BoardSize, LadderAnswer, LadderSeed, LadderStart, LadderVerdict, LeaderboardEntry,
};
use arcade_queens::{QueensStats, QueensSubmission, QueensVerdict};
use arcade_traffic::{TrafficAnswer, TrafficSeed, TrafficStart, TrafficVerdict};
use arcade_tsp::{TspAnswer, TspSeed, TspStart, TspVerdict};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

/// A round the service agreed to run.
#[derive(Debug, Clone, derive_new::new)]
pub struct Started<P: Puzzle> {
    /// Round identifier for the submit call.
    pub game_id: GameId,
    /// Puzzle data.
    pub seed: P::Seed,
}

/// Start and submit for one puzzle.
///
/// Failures come back as [`RemoteError`]; nothing is retried.
#[async_trait]
pub trait RemoteSession<P: Puzzle>: Send + Sync {
    /// Asks the service for a new round.
    async fn start(&self, player: &str, config: &P::Config) -> Result<Started<P>, RemoteError>;

    /// Sends the final answer for a round.
    async fn submit(
        &self,
        game_id: &GameId,
        player: &str,
        answer: &P::Answer,
    ) -> Result<P::Verdict, RemoteError>;
}

/// JSON-over-HTTP client for the scoring service.
#[derive(Debug, Clone)]
pub struct HttpArcadeClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpArcadeClient {
    /// Client for the configured service.
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: &ArcadeConfig) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            base_url: config.base_url().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Service root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, kind: GameKind, tail: &str) -> String {
        format!("{}/{}/{}", self.base_url, kind.path_segment(), tail)
    }

    async fn post<B, T>(&self, url: String, body: &B) -> Result<T, RemoteError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::status(status.as_u16(), &url));
        }
        Ok(response.json().await?)
    }

    async fn get<T>(&self, url: String) -> Result<T, RemoteError>
    where
        T: DeserializeOwned,
    {
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::status(status.as_u16(), &url));
        }
        Ok(response.json().await?)
    }

    async fn solve<B, T>(&self, kind: GameKind, game_id: &GameId, body: &B) -> Result<T, RemoteError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        self.post(self.url(kind, &format!("solve/{}", game_id)), body)
            .await
    }

    /// Past snake-and-ladder wins, best first.
    #[instrument(skip(self))]
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, RemoteError> {
        let entries: Vec<LeaderboardEntry> =
            self.get(self.url(GameKind::SnakeLadder, "leaderboard")).await?;
        info!(count = entries.len(), "Fetched leaderboard");
        Ok(entries)
    }

    /// Eight-queens discovery counts and solver timings.
    #[instrument(skip(self))]
    pub async fn queens_stats(&self) -> Result<QueensStats, RemoteError> {
        self.get(self.url(GameKind::EightQueens, "stats")).await
    }

    /// Algorithm timing history for one game.
    #[instrument(skip(self))]
    pub async fn comparison(&self, kind: GameKind) -> Result<Comparison, RemoteError> {
        let comparison: Comparison = self.get(self.url(kind, "comparison")).await?;
        info!(count = comparison.count, "Fetched comparison");
        Ok(comparison)
    }
}

#[async_trait]
impl RemoteSession<SnakeLadder> for HttpArcadeClient {
    #[instrument(skip(self))]
    async fn start(
        &self,
        player: &str,
        config: &BoardSize,
    ) -> Result<Started<SnakeLadder>, RemoteError> {
        let body = LadderStart {
            player_name: player.to_string(),
            board_size: *config,
        };
        let seed: LadderSeed = self.post(self.url(GameKind::SnakeLadder, "start"), &body).await?;
        Ok(Started::new(GameId::new(seed.game_id.clone()), seed))
    }

    #[instrument(skip(self, _player))]
    async fn submit(
        &self,
        game_id: &GameId,
        _player: &str,
        answer: &LadderAnswer,
    ) -> Result<LadderVerdict, RemoteError> {
        self.solve(GameKind::SnakeLadder, game_id, answer).await
    }
}

#[async_trait]
impl RemoteSession<TowerOfHanoi> for HttpArcadeClient {
    #[instrument(skip(self))]
    async fn start(
        &self,
        player: &str,
        config: &PegCount,
    ) -> Result<Started<TowerOfHanoi>, RemoteError> {
        let body = HanoiStart {
            player_name: player.to_string(),
            num_pegs: config.get(),
        };
        let seed: HanoiSeed = self.post(self.url(GameKind::Hanoi, "start"), &body).await?;
        Ok(Started::new(GameId::new(seed.game_id.clone()), seed))
    }

    #[instrument(skip(self, _player))]
    async fn submit(
        &self,
        game_id: &GameId,
        _player: &str,
        answer: &HanoiAnswer,
    ) -> Result<HanoiVerdict, RemoteError> {
        self.solve(GameKind::Hanoi, game_id, answer).await
    }
}

#[async_trait]
impl RemoteSession<TravelingSalesman> for HttpArcadeClient {
    #[instrument(skip(self))]
    async fn start(
        &self,
        player: &str,
        _config: &(),
    ) -> Result<Started<TravelingSalesman>, RemoteError> {
        let body = TspStart {
            player_name: player.to_string(),
        };
        let seed: TspSeed = self.post(self.url(GameKind::Tsp, "start"), &body).await?;
        Ok(Started::new(GameId::new(seed.game_id.clone()), seed))
    }

    #[instrument(skip(self, _player))]
    async fn submit(
        &self,
        game_id: &GameId,
        _player: &str,
        answer: &TspAnswer,
    ) -> Result<TspVerdict, RemoteError> {
        self.solve(GameKind::Tsp, game_id, answer).await
    }
}

#[async_trait]
impl RemoteSession<Traffic> for HttpArcadeClient {
    #[instrument(skip(self))]
    async fn start(&self, player: &str, _config: &()) -> Result<Started<Traffic>, RemoteError> {
        let body = TrafficStart {
            player_name: player.to_string(),
        };
        let seed: TrafficSeed = self.post(self.url(GameKind::Traffic, "start"), &body).await?;
        Ok(Started::new(GameId::new(seed.game_id.clone()), seed))
    }

    #[instrument(skip(self, _player))]
    async fn submit(
        &self,
        game_id: &GameId,
        _player: &str,
        answer: &TrafficAnswer,
    ) -> Result<TrafficVerdict, RemoteError> {
        self.solve(GameKind::Traffic, game_id, answer).await
    }
}

/// Eight queens has no remote start; the round id is minted locally and
/// the placement goes to `/eight-queens/submit`.
#[async_trait]
impl RemoteSession<EightQueens> for HttpArcadeClient {
    #[instrument(skip(self))]
    async fn start(&self, player: &str, _config: &()) -> Result<Started<EightQueens>, RemoteError> {
        let game_id = GameId::mint(GameKind::EightQueens);
        debug!(%game_id, "Minted local round id");
        Ok(Started::new(game_id, ()))
    }

    #[instrument(skip(self, _player))]
    async fn submit(
        &self,
        game_id: &GameId,
        _player: &str,
        answer: &QueensSubmission,
    ) -> Result<QueensVerdict, RemoteError> {
        self.post(self.url(GameKind::EightQueens, "submit"), answer)
            .await
    }
}
