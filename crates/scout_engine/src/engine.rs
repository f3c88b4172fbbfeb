use std::sync::{mpsc, Arc};
use std::thread;

use crate::research::{HttpResearchProvider, ResearchProvider, ResearchSettings};
use crate::{EngineEvent, QueryId};

enum EngineCommand {
    Research { query_id: QueryId, query: String },
}

/// Handle to the worker thread that runs the async research client.
///
/// Commands go in over a channel; one `ResearchCompleted` event comes out per
/// command. The shell drains events with `try_recv` on its tick.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ResearchSettings) -> Self {
        Self::with_provider(Arc::new(HttpResearchProvider::new(settings)))
    }

    pub fn with_provider(provider: Arc<dyn ResearchProvider>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let provider = provider.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(provider.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn enqueue(&self, query_id: QueryId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Research {
            query_id,
            query: query.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    provider: &dyn ResearchProvider,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Research { query_id, query } => {
            let result = provider.research(&query).await;
            let _ = event_tx.send(EngineEvent::ResearchCompleted { query_id, result });
        }
    }
}
