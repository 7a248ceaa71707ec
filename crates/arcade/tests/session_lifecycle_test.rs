//! Session step machine against an in-memory scoring service.

use arcade::games::{EightQueens, TowerOfHanoi, TravelingSalesman};
use arcade::{
    ConfettiTrigger, ErrorKind, GameId, NoticeLevel, RemoteError, RemoteSession, Session,
    SessionError, Started, Step, ToastQueue, Transition, TransitionListener,
};
use arcade_hanoi::{Click, HanoiAnswer, HanoiError, HanoiSeed, HanoiVerdict, PegCount};
use arcade_queens::{QueensError, QueensSubmission, QueensVerdict, Square};
use arcade_tsp::{City, DistanceMatrix, TspAnswer, TspSeed, TspVerdict};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeService {
    starts: AtomicUsize,
    submits: AtomicUsize,
    fail_start: bool,
    optimal: u32,
}

impl FakeService {
    fn calls(&self) -> (usize, usize) {
        (
            self.starts.load(Ordering::SeqCst),
            self.submits.load(Ordering::SeqCst),
        )
    }
}

#[async_trait]
impl RemoteSession<TowerOfHanoi> for FakeService {
    async fn start(
        &self,
        player: &str,
        config: &PegCount,
    ) -> Result<Started<TowerOfHanoi>, RemoteError> {
        let n = self.starts.fetch_add(1, Ordering::SeqCst);
        if self.fail_start {
            return Err(RemoteError::status(503, "fake/hanoi/start"));
        }
        Ok(Started {
            game_id: GameId::new(format!("h-{n}")),
            seed: HanoiSeed {
                game_id: format!("h-{n}"),
                player_name: player.to_string(),
                num_disks: 3,
                num_pegs: config.get(),
            },
        })
    }

    async fn submit(
        &self,
        _game_id: &GameId,
        _player: &str,
        answer: &HanoiAnswer,
    ) -> Result<HanoiVerdict, RemoteError> {
        self.submits.fetch_add(1, Ordering::SeqCst);
        Ok(HanoiVerdict {
            optimal_min_moves: self.optimal,
            correct: answer.user_min_moves == self.optimal,
            user_min_moves: answer.user_min_moves,
            algorithm_times: BTreeMap::new(),
            message: String::new(),
        })
    }
}

#[async_trait]
impl RemoteSession<EightQueens> for FakeService {
    async fn start(&self, _player: &str, _config: &()) -> Result<Started<EightQueens>, RemoteError> {
        Ok(Started {
            game_id: GameId::mint(arcade::GameKind::EightQueens),
            seed: (),
        })
    }

    async fn submit(
        &self,
        _game_id: &GameId,
        _player: &str,
        _answer: &QueensSubmission,
    ) -> Result<QueensVerdict, RemoteError> {
        self.submits.fetch_add(1, Ordering::SeqCst);
        Ok(QueensVerdict {
            valid: false,
            unique: false,
            message: "Queens attack each other".into(),
            total_discovered: 0,
        })
    }
}

#[async_trait]
impl RemoteSession<TravelingSalesman> for FakeService {
    async fn start(
        &self,
        _player: &str,
        _config: &(),
    ) -> Result<Started<TravelingSalesman>, RemoteError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        let distances = DistanceMatrix::new(BTreeMap::from([(
            City::A,
            BTreeMap::from([(City::B, 50), (City::C, 80)]),
        )]));
        Ok(Started {
            game_id: GameId::new("t-1"),
            seed: TspSeed {
                game_id: "t-1".into(),
                player_name: String::new(),
                home_city: City::A,
                distances,
            },
        })
    }

    async fn submit(
        &self,
        _game_id: &GameId,
        _player: &str,
        _answer: &TspAnswer,
    ) -> Result<TspVerdict, RemoteError> {
        self.submits.fetch_add(1, Ordering::SeqCst);
        Err(RemoteError::new("connection reset"))
    }
}

#[derive(Default)]
struct Recorder(Mutex<Vec<Transition>>);

impl TransitionListener for Recorder {
    fn on_transition(&self, event: &Transition) {
        self.0.lock().unwrap().push(*event);
    }
}

fn hanoi_session(toasts: Arc<ToastQueue>) -> Session<TowerOfHanoi> {
    Session::new(toasts)
}

#[tokio::test]
async fn test_empty_name_is_rejected() {
    let toasts = Arc::new(ToastQueue::default());
    let mut session = hanoi_session(toasts.clone());
    let err = session.configure("   ", PegCount::Three).unwrap_err();
    assert_eq!(err, SessionError::EmptyName);
    assert_eq!(err.kind(), ErrorKind::Input);
    assert_eq!(session.step(), Step::Setup);
    assert_eq!(toasts.active()[0].level, NoticeLevel::Warning);
}

#[tokio::test]
async fn test_hanoi_round_with_confetti() {
    let service = FakeService {
        optimal: 7,
        ..FakeService::default()
    };
    let confetti = Arc::new(ConfettiTrigger::default());
    let recorder = Arc::new(Recorder::default());
    let mut session = hanoi_session(Arc::new(ToastQueue::default()));
    session.subscribe(confetti.clone());
    session.subscribe(recorder.clone());

    session.configure(" ada ", PegCount::Three).unwrap();
    assert_eq!(session.player_name(), "ada");
    session.start(&service).await.unwrap();
    assert_eq!(session.step(), Step::Playing);
    assert_eq!(session.board().pegs().stacks()[0], vec![3, 2, 1]);

    assert_eq!(session.try_play(|b| b.click(0)).unwrap(), Click::Selected(0));
    let moved = session.try_play(|b| b.click(2)).unwrap();
    assert!(matches!(moved, Click::Moved(m) if m.to_string() == "A -> C"));
    assert_eq!(session.board().pegs().stacks()[0], vec![3, 2]);
    assert_eq!(session.board().pegs().stacks()[2], vec![1]);

    // Disk 2 onto disk 1 is illegal.
    session.try_play(|b| b.click(0)).unwrap();
    let before = session.board().clone();
    let err = session.try_play(|b| b.click(2)).unwrap_err();
    assert_eq!(
        err,
        SessionError::Hanoi(HanoiError::LargerOnSmaller { disk: 2, top: 1 })
    );
    assert_eq!(session.board().pegs(), before.pegs());
    assert_eq!(session.board().move_count(), 1);
    assert!(session.error().is_some());

    session.play(|b| b.set_guess(7)).unwrap();
    session.submit(&service).await.unwrap();
    assert_eq!(session.step(), Step::Result);
    assert!(session.outcome().unwrap().correct);
    assert!(session.error().is_none());
    assert_eq!(confetti.bursts(), 1);

    let steps: Vec<Step> = recorder.0.lock().unwrap().iter().map(|t| t.to).collect();
    assert_eq!(steps, vec![Step::Configuring, Step::Playing, Step::Result]);
    assert_eq!(service.calls(), (1, 1));
}

#[tokio::test]
async fn test_failed_start_stays_configuring() {
    let service = FakeService {
        fail_start: true,
        ..FakeService::default()
    };
    let toasts = Arc::new(ToastQueue::default());
    let mut session = hanoi_session(toasts.clone());
    session.configure("ada", PegCount::Four).unwrap();

    let err = session.start(&service).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Remote);
    assert_eq!(session.step(), Step::Configuring);
    assert!(session.game_id().is_none());
    assert_eq!(toasts.active().last().unwrap().level, NoticeLevel::Error);
}

#[tokio::test]
async fn test_submit_before_start_makes_no_call() {
    let service = FakeService::default();
    let mut session = hanoi_session(Arc::new(ToastQueue::default()));
    session.configure("ada", PegCount::Three).unwrap();

    let err = session.submit(&service).await.unwrap_err();
    assert!(matches!(err, SessionError::WrongStep { step: Step::Configuring, .. }));
    assert_eq!(service.calls(), (0, 0));
}

#[tokio::test]
async fn test_missing_guess_blocks_submit() {
    let service = FakeService::default();
    let mut session = hanoi_session(Arc::new(ToastQueue::default()));
    session.configure("ada", PegCount::Three).unwrap();
    session.start(&service).await.unwrap();

    let err = session.submit(&service).await.unwrap_err();
    assert_eq!(err, SessionError::Hanoi(HanoiError::MissingGuess));
    assert_eq!(service.calls(), (1, 0));
    assert_eq!(session.step(), Step::Playing);
}

#[tokio::test]
async fn test_stale_responses_are_discarded() {
    let service = FakeService {
        optimal: 7,
        ..FakeService::default()
    };
    let mut session = hanoi_session(Arc::new(ToastQueue::default()));
    session.configure("ada", PegCount::Three).unwrap();

    // A second response to the same start request.
    let ticket = session.begin_start().unwrap();
    let first = RemoteSession::<TowerOfHanoi>::start(&service, "ada", &PegCount::Three).await;
    let second = RemoteSession::<TowerOfHanoi>::start(&service, "ada", &PegCount::Three).await;
    session.finish_start(ticket, first).unwrap();
    let id = session.game_id().cloned();
    assert_eq!(session.finish_start(ticket, second), Err(SessionError::Stale));
    assert_eq!(session.game_id().cloned(), id);

    // A verdict for a round abandoned by retry.
    session.play(|b| b.set_guess(7)).unwrap();
    let old = session.begin_submit().unwrap();
    let verdict =
        RemoteSession::<TowerOfHanoi>::submit(&service, old.game_id(), "ada", old.answer()).await;
    session.finish_submit(old.clone(), verdict.clone()).unwrap();
    session.retry().unwrap();
    assert_eq!(session.step(), Step::Configuring);
    session.start(&service).await.unwrap();

    assert_eq!(session.finish_submit(old, verdict), Err(SessionError::Stale));
    assert_eq!(session.step(), Step::Playing);
    assert!(session.outcome().is_none());
}

#[tokio::test]
async fn test_reset_only_from_result() {
    let service = FakeService {
        optimal: 7,
        ..FakeService::default()
    };
    let mut session = hanoi_session(Arc::new(ToastQueue::default()));
    assert!(session.reset().is_err());
    session.configure("ada", PegCount::Three).unwrap();
    session.start(&service).await.unwrap();
    assert!(session.reset().is_err());

    session.play(|b| b.set_guess(5)).unwrap();
    session.submit(&service).await.unwrap();
    assert!(!session.outcome().unwrap().correct);

    session.reset().unwrap();
    assert_eq!(session.step(), Step::Setup);
    assert_eq!(session.player_name(), "");
    assert!(session.game_id().is_none());
    assert!(session.outcome().is_none());
}

#[tokio::test]
async fn test_queens_count_checked_locally() {
    let service = FakeService::default();
    let mut session: Session<EightQueens> = Session::new(Arc::new(ToastQueue::default()));
    session.configure("ada", ()).unwrap();
    session.start(&service).await.unwrap();
    assert!(session.game_id().unwrap().as_str().starts_with("eight-queens-"));

    for row in 0..7 {
        session
            .try_play(|b| b.toggle(Square::new(row, row).unwrap()))
            .unwrap();
    }
    let err = session.submit(&service).await.unwrap_err();
    assert_eq!(err, SessionError::Queens(QueensError::WrongCount { placed: 7 }));
    assert_eq!(service.calls(), (0, 0));
}

#[tokio::test]
async fn test_queens_invalid_verdict_keeps_highlights() {
    let service = FakeService::default();
    let confetti = Arc::new(ConfettiTrigger::default());
    let mut session: Session<EightQueens> = Session::new(Arc::new(ToastQueue::default()));
    session.subscribe(confetti.clone());
    session.configure("ada", ()).unwrap();
    session.start(&service).await.unwrap();

    // Main diagonal: every pair attacks.
    for row in 0..8 {
        session
            .try_play(|b| b.toggle(Square::new(row, row).unwrap()))
            .unwrap();
    }
    session.submit(&service).await.unwrap();
    assert_eq!(service.calls(), (0, 1));
    assert_eq!(session.board().conflicts().len(), 8);
    assert!(!session.outcome().unwrap().valid);
    assert_eq!(confetti.bursts(), 0);
}

#[tokio::test]
async fn test_tsp_remote_failure_keeps_board() {
    let service = FakeService::default();
    let mut session: Session<TravelingSalesman> = Session::new(Arc::new(ToastQueue::default()));
    session.configure("ada", ()).unwrap();
    session.start(&service).await.unwrap();

    session.try_play(|plan| plan.toggle(City::B)).unwrap();
    session.try_play(|plan| plan.add_to_path(City::B)).unwrap();
    let distances = session.seed().unwrap().distances.clone();
    assert_eq!(session.board().distance(&distances), Ok(100));

    let err = session.submit(&service).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Remote);
    assert_eq!(session.step(), Step::Playing);
    assert_eq!(session.board().path(), &[City::B]);
}

#[tokio::test]
async fn test_one_answer_in_flight_per_round() {
    let service = FakeService {
        optimal: 7,
        ..FakeService::default()
    };
    let mut session = hanoi_session(Arc::new(ToastQueue::default()));
    session.configure("ada", PegCount::Three).unwrap();
    session.start(&service).await.unwrap();

    session.play(|b| b.set_guess(7)).unwrap();
    let first = session.begin_submit().unwrap();
    assert!(session.is_submitting());

    session.play(|b| b.set_guess(8)).unwrap();
    let err = session.begin_submit().unwrap_err();
    assert_eq!(err, SessionError::SubmitInFlight);
    assert_eq!(err.kind(), ErrorKind::Consistency);
    assert!(session.submit(&service).await.is_err());
    assert_eq!(service.calls(), (1, 0));

    // A failed request frees the round for another attempt.
    let failed = Err(RemoteError::status(502, "fake/hanoi/solve"));
    assert!(session.finish_submit(first, failed).is_err());
    assert!(!session.is_submitting());
    assert_eq!(session.step(), Step::Playing);

    // So does giving up on a ticket that was never sent.
    let unsent = session.begin_submit().unwrap();
    session.cancel_submit(unsent);
    assert!(!session.is_submitting());

    session.play(|b| b.set_guess(7)).unwrap();
    session.submit(&service).await.unwrap();
    assert_eq!(service.calls(), (1, 1));
    assert!(session.outcome().unwrap().correct);
    assert!(!session.is_submitting());
}

#[tokio::test]
async fn test_unusable_seed_stays_configuring() {
    let toasts = Arc::new(ToastQueue::default());
    let mut session = hanoi_session(toasts.clone());
    session.configure("ada", PegCount::Three).unwrap();

    let ticket = session.begin_start().unwrap();
    let empty = Ok(Started {
        game_id: GameId::new("h-empty"),
        seed: HanoiSeed {
            game_id: "h-empty".into(),
            player_name: "ada".into(),
            num_disks: 0,
            num_pegs: 3,
        },
    });
    let err = session.finish_start(ticket, empty).unwrap_err();
    assert!(matches!(err, SessionError::InvalidSeed(_)));
    assert_eq!(err.kind(), ErrorKind::Remote);
    assert_eq!(session.step(), Step::Configuring);
    assert!(session.game_id().is_none());
    assert!(session.seed().is_none());
    assert_eq!(toasts.active().last().unwrap().level, NoticeLevel::Error);

    // The same ticket is still good for a usable answer.
    let ok = Ok(Started {
        game_id: GameId::new("h-1"),
        seed: HanoiSeed {
            game_id: "h-1".into(),
            player_name: "ada".into(),
            num_disks: 3,
            num_pegs: 3,
        },
    });
    session.finish_start(ticket, ok).unwrap();
    assert_eq!(session.step(), Step::Playing);
}
