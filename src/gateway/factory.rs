use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::publisher::{DiscardPublisher, LogsPublisher};

pub fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => {
            Box::new(LogsPublisher::new())
        }
        GatewayPublisherVia::Discard => {
            Box::new(DiscardPublisher::default())
        }
    }
}
