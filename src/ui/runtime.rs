use std::io::{self, Stdout};
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::buffer::SystemClipboard;
use crate::shutdown::{ShutdownCoordinator, ShutdownHandle};
use crate::transform::Registry;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler, EventPresenter};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::watch::WatchLoop;

const TICK_RATE: Duration = Duration::from_millis(250);

pub fn run(registry: Arc<Registry>, poll_interval: Duration) -> io::Result<()> {
    let shutdown = ShutdownCoordinator::new();
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(poll_interval);
    let events = EventHandler::new(TICK_RATE, shutdown.handle());
    let watcher = spawn_watcher(registry, poll_interval, events.sender(), shutdown.handle())?;

    let result = event_loop(&mut terminal, &mut app, &events);
    let result = stop_watcher(&shutdown, watcher, result);
    drop(guard);
    result
}

/// Signal shutdown and join the watch thread, whatever the UI loop returned.
fn stop_watcher(
    shutdown: &ShutdownCoordinator,
    watcher: JoinHandle<()>,
    result: io::Result<()>,
) -> io::Result<()> {
    if let Err(err) = &result {
        tracing::error!(error = %err, "UI loop failed");
    }
    shutdown.signal();
    if watcher.join().is_err() {
        tracing::error!("Watch thread panicked");
    }
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Results(rows)) => app.on_results(rows),
            Ok(AppEvent::WatchError(message)) => app.on_watch_error(message),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}

/// Run the watch loop on its own thread. The clipboard handle is opened and
/// used only there.
fn spawn_watcher(
    registry: Arc<Registry>,
    poll_interval: Duration,
    tx: Sender<AppEvent>,
    shutdown: ShutdownHandle,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("clipboard-watch".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    tracing::error!(error = %err, "Failed to build watch runtime");
                    let _ = tx.send(AppEvent::WatchError(format!("Watcher failed: {err}")));
                    return;
                }
            };
            let clipboard = SystemClipboard::new();
            let watch = WatchLoop::new(registry, clipboard, EventPresenter::new(tx));
            runtime.block_on(watch.run(poll_interval, shutdown));
        })
}
