//! Main TUI runner: terminal lifecycle, event loop and background tasks.
//!
//! Messages flow through a single mpsc channel. Key events and ticks come
//! from the terminal; timer tasks (the simulated save latency and the
//! success hold) are spawned from update actions and report back through
//! the same channel, so every state change goes through `update()`.

use std::path::PathBuf;

use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tokio::time::sleep;

use safedrome_app::settings::{SAVE_DELAY, SUCCESS_HOLD};
use safedrome_app::{config, update, AppState, Message, Task, UpdateAction};
use safedrome_core::prelude::*;

/// Run the TUI application until quit
pub async fn run(prefs_path: Option<PathBuf>) -> Result<()> {
    crate::terminal::install_panic_hook();
    let mut terminal = ratatui::init();

    let mut state = AppState::with_preferences(prefs_path);
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);

    info!("Starting SafeDrome TUI");
    let result = run_loop(&mut terminal, &mut state, &msg_tx, &mut msg_rx);

    ratatui::restore();
    info!("SafeDrome TUI stopped");
    result
}

fn run_loop(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    msg_tx: &mpsc::Sender<Message>,
    msg_rx: &mut mpsc::Receiver<Message>,
) -> Result<()> {
    loop {
        // Drain task messages first so timer results land before the draw
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx);
        }

        if state.should_quit() {
            break;
        }

        terminal.draw(|frame| crate::render::view(frame, state))?;

        if let Some(msg) = crate::event::poll()? {
            process_message(state, msg, msg_tx);
        }
    }
    Ok(())
}

/// Feed a message through update(), following the follow-up chain and
/// spawning any requested background tasks.
fn process_message(state: &mut AppState, msg: Message, msg_tx: &mpsc::Sender<Message>) {
    let mut current = Some(msg);
    while let Some(msg) = current.take() {
        let result = update(state, msg);
        if let Some(action) = result.action {
            handle_action(action, msg_tx);
        }
        current = result.message;
    }
}

fn handle_action(action: UpdateAction, msg_tx: &mpsc::Sender<Message>) {
    match action {
        UpdateAction::SpawnTask(task) => spawn_task(task, msg_tx.clone()),
    }
}

/// Spawn a timer task that reports back through the message channel
pub(crate) fn spawn_task(task: Task, tx: mpsc::Sender<Message>) {
    match task {
        Task::SaveSections { sections, path } => {
            tokio::spawn(async move {
                sleep(SAVE_DELAY).await;
                for save in sections {
                    let result = match &path {
                        Some(path) => config::persist_section(path, save.section, &save.values)
                            .map_err(|err| {
                                Error::settings_persist(save.section.key(), err.to_string())
                                    .to_string()
                            }),
                        None => Ok(()),
                    };
                    let finished = Message::SettingsSaveFinished {
                        section: save.section,
                        result,
                    };
                    if tx.send(finished).await.is_err() {
                        debug!("Message channel closed, dropping save result");
                        break;
                    }
                }
            });
        }
        Task::HoldSuccess { section, epoch } => {
            tokio::spawn(async move {
                sleep(SUCCESS_HOLD).await;
                let _ = tx.send(Message::SettingsSaveExpired { section, epoch }).await;
            });
        }
    }
}
