use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// LogsPublisher writes every domain event as one json line on the structured log
#[derive(Debug, Default)]
pub struct LogsPublisher {}

impl LogsPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

impl EventPublisher for LogsPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        let json = serde_json::to_string(event)?;
        info!(event_id = event.event_id.as_str(), kind = ?event.kind, "published {}", json);
        Ok(())
    }
}

// DiscardPublisher drops events, for runs that do not want an audit trail
#[derive(Debug, Default)]
pub struct DiscardPublisher {}

impl EventPublisher for DiscardPublisher {
    fn publish(&self, _event: &DomainEvent) -> LibraryResult<()> {
        Ok(())
    }
}
