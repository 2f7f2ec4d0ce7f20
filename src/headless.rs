//! Headless mode: results streamed to stdout until Ctrl+C.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::buffer::SystemClipboard;
use crate::config::OutputFormat;
use crate::present::StreamPresenter;
use crate::shutdown::ShutdownCoordinator;
use crate::transform::Registry;
use crate::watch::WatchLoop;

pub fn run(
    registry: Arc<Registry>,
    poll_interval: Duration,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let clipboard = SystemClipboard::new();
    let presenter = StreamPresenter::new(io::stdout(), format);
    let watch = WatchLoop::new(registry, clipboard, presenter);
    let shutdown = ShutdownCoordinator::new();

    runtime.block_on(async {
        let watching = watch.run(poll_interval, shutdown.handle());
        tokio::pin!(watching);
        tokio::select! {
            _ = &mut watching => {}
            result = tokio::signal::ctrl_c() => {
                match result {
                    Ok(()) => shutdown.signal(),
                    Err(err) => {
                        tracing::warn!(error = %err, "Ctrl+C handler unavailable, running until killed");
                    }
                }
                watching.await;
            }
        }
    });
    Ok(())
}
