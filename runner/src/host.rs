use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tokio::time::{interval, Instant, MissedTickBehavior};

use snake_engine::{
    log, notify_transition, Clock, FrameRequester, GameReport, GameSettings, GameStatus,
    InputCommand, LoopScheduler, SnakeGame,
};

use crate::autopilot::Autopilot;
use crate::text_renderer::TextRenderer;

pub struct HostOptions {
    pub frame_interval: Duration,
    pub autopilot: bool,
    pub render: bool,
}

pub struct TokioClock {
    origin: Instant,
}

impl TokioClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Clock for TokioClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Frame ids handed out against a free-running interval timer. The timer keeps
/// ticking after a cancel; the scheduler drops ticks whose id is no longer pending.
#[derive(Default)]
pub struct IntervalFrames {
    next_id: u64,
}

impl FrameRequester for IntervalFrames {
    type Handle = u64;

    fn request_frame(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn cancel_frame(&mut self, _handle: u64) {}
}

type HostScheduler = LoopScheduler<TokioClock, IntervalFrames>;

/// Reads keys on a plain thread so a pending stdin read never holds up runtime shutdown.
/// Turns go straight into the game's direction slot; everything else is forwarded.
pub fn spawn_stdin_reader(game: Arc<Mutex<SnakeGame>>, command_tx: mpsc::UnboundedSender<InputCommand>) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else {
                break;
            };
            for key in line.split_whitespace() {
                match InputCommand::from_key(key) {
                    Some(InputCommand::Turn(direction)) => {
                        game.blocking_lock().request_direction(direction);
                    }
                    Some(command) => {
                        if command_tx.send(command).is_err() {
                            return;
                        }
                    }
                    None => log!("Unknown key '{}'", key),
                }
            }
        }
    });
}

/// Plays until quit, Ctrl+C, or (with the autopilot) the first game over.
/// Returns the report of the last finished game, if any.
pub async fn run(settings: GameSettings, seed: u64, options: HostOptions) -> Option<GameReport> {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };
    run_until(settings, seed, options, ctrl_c).await
}

/// Same as [`run`], stopping when `shutdown` completes. The future is polled across
/// loop iterations, so a completion during a frame is seen on the next select.
pub async fn run_until(
    settings: GameSettings,
    seed: u64,
    options: HostOptions,
    shutdown: impl Future<Output = ()>,
) -> Option<GameReport> {
    tokio::pin!(shutdown);
    let game = Arc::new(Mutex::new(SnakeGame::new(settings, seed)));
    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    spawn_stdin_reader(game.clone(), command_tx);

    let mut scheduler = LoopScheduler::new(TokioClock::new(), IntervalFrames::default());
    let mut renderer = TextRenderer::new(options.render);
    let mut frame_timer = interval(options.frame_interval);
    frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut last_report = None;
    start_game(&mut *game.lock().await, &mut scheduler, &mut renderer);

    loop {
        tokio::select! {
            _ = frame_timer.tick() => {
                let Some(handle) = scheduler.pending_frame() else {
                    continue;
                };
                let mut game = game.lock().await;
                let outcome = scheduler.on_frame(handle, &mut game, &mut renderer);

                if outcome.stepped && game.status() == GameStatus::GameOver {
                    let report = game.report(scheduler.play_time());
                    match report.to_yaml() {
                        Ok(yaml) => log!("Final report (seed {}):\n{}", game.seed(), yaml),
                        Err(e) => log!("{}", e),
                    }
                    last_report = Some(report);
                    if options.autopilot {
                        break;
                    }
                }

                if options.autopilot
                    && game.status() == GameStatus::Playing
                    && let Some(direction) = Autopilot::choose_direction(game.state())
                {
                    game.request_direction(direction);
                }
            }
            Some(command) = command_rx.recv() => {
                let mut game = game.lock().await;
                match command {
                    InputCommand::TogglePause => match game.status() {
                        GameStatus::Playing => pause_game(&mut game, &mut scheduler, &mut renderer),
                        GameStatus::Idle | GameStatus::Paused => {
                            start_game(&mut game, &mut scheduler, &mut renderer)
                        }
                        GameStatus::GameOver => {}
                    },
                    InputCommand::Reset => {
                        scheduler.stop_loop();
                        scheduler.reset_play_time();
                        game.reset();
                        log!("Board reset. Press p to start");
                    }
                    InputCommand::Quit => break,
                    InputCommand::Turn(direction) => {
                        game.request_direction(direction);
                    }
                }
            }
            _ = &mut shutdown => {
                log!("Interrupted");
                break;
            }
        }
    }

    scheduler.stop_loop();
    log!(
        "Stopped after {} ticks ({} skipped)",
        scheduler.steps(),
        scheduler.failed_steps()
    );
    last_report
}

fn start_game(game: &mut SnakeGame, scheduler: &mut HostScheduler, renderer: &mut TextRenderer) {
    let before = game.status();
    if game.start() {
        scheduler.start_loop();
        notify_transition(renderer, before, game.status());
    }
}

fn pause_game(game: &mut SnakeGame, scheduler: &mut HostScheduler, renderer: &mut TextRenderer) {
    let before = game.status();
    if game.pause() {
        scheduler.stop_loop();
        notify_transition(renderer, before, game.status());
    }
}
