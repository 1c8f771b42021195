//! The notification dispatcher.

use crate::config::NotifyConfig;
use crate::message::{render_order, render_wish};
use crate::transport::{HttpTransport, OutboundMessage, Transport};
use std::sync::Arc;
use trove_commerce::inquiry::{OrderRequest, WishRequest};

/// A validated payload headed for the operator channel.
#[derive(Debug, Clone, Copy)]
pub enum Notification<'a> {
    Order(&'a OrderRequest),
    Wish(&'a WishRequest),
}

impl Notification<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::Order(_) => "order",
            Notification::Wish(_) => "wish",
        }
    }

    /// Defensive shape check. Payloads arrive validated; this catches a
    /// caller that constructed one by hand with empty required fields.
    fn shape_ok(&self) -> bool {
        match self {
            Notification::Order(order) => {
                !order.customer_name.is_empty()
                    && !order.phone.is_empty()
                    && !order.product_id.as_str().is_empty()
            }
            Notification::Wish(wish) => {
                !wish.description.is_empty() && !wish.full_name.is_empty()
            }
        }
    }

    fn render(&self) -> String {
        match self {
            Notification::Order(order) => render_order(order),
            Notification::Wish(wish) => render_wish(wish),
        }
    }
}

/// Outcome of one delivery attempt. Always a value, never an error:
/// callers decide whether an undelivered notification blocks their flow.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryReport {
    /// Whether the endpoint accepted the message.
    pub delivered: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// Upstream error code, when the endpoint rejected the message.
    pub error_code: Option<i64>,
}

impl DeliveryReport {
    fn success() -> Self {
        Self {
            delivered: true,
            message: "notification delivered".to_string(),
            error_code: None,
        }
    }

    fn failure(message: impl Into<String>, error_code: Option<i64>) -> Self {
        Self {
            delivered: false,
            message: message.into(),
            error_code,
        }
    }
}

/// Formats and delivers operator notifications.
pub struct Dispatcher {
    config: NotifyConfig,
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    /// Dispatcher over the production HTTP transport.
    pub fn new(config: NotifyConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    /// Dispatcher over a custom transport, for tests and staging.
    pub fn with_transport(config: NotifyConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Deliver one notification.
    ///
    /// Checks configuration before touching the network, re-checks the
    /// payload shape, renders the escaped message, delivers it and
    /// interprets the acknowledgement. Every failure mode comes back as
    /// a failed [`DeliveryReport`].
    pub async fn notify(&self, notification: Notification<'_>) -> DeliveryReport {
        let (token, chat_id) = match self.config.credentials() {
            Ok(credentials) => credentials,
            Err(e) => {
                tracing::warn!(kind = notification.kind(), error = %e, "notification skipped");
                return DeliveryReport::failure(e.to_string(), None);
            }
        };

        if !notification.shape_ok() {
            return DeliveryReport::failure(
                format!("{} payload failed shape check", notification.kind()),
                None,
            );
        }

        let message = OutboundMessage::markdown(chat_id, notification.render());

        match self.transport.deliver(token, &message).await {
            Ok(ack) if ack.ok => DeliveryReport::success(),
            Ok(ack) => {
                let description = ack
                    .description
                    .unwrap_or_else(|| "endpoint rejected the message".to_string());
                tracing::warn!(
                    kind = notification.kind(),
                    code = ack.error_code,
                    description = %description,
                    "notification rejected"
                );
                DeliveryReport::failure(description, ack.error_code)
            }
            Err(e) => {
                tracing::warn!(kind = notification.kind(), error = %e, "notification delivery failed");
                DeliveryReport::failure(e.to_string(), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{ApiAck, TransportError};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;
    use trove_commerce::ProductId;

    /// Records every delivered message and replays canned acks.
    struct FakeTransport {
        acks: Mutex<Vec<Result<ApiAck, TransportError>>>,
        sent: Mutex<Vec<(String, OutboundMessage)>>,
    }

    impl FakeTransport {
        fn replying(ack: Result<ApiAck, TransportError>) -> Arc<Self> {
            Arc::new(Self {
                acks: Mutex::new(vec![ack]),
                sent: Mutex::new(Vec::new()),
            })
        }

        fn sent(&self) -> Vec<(String, OutboundMessage)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn deliver(
            &self,
            token: &str,
            message: &OutboundMessage,
        ) -> Result<ApiAck, TransportError> {
            self.sent
                .lock()
                .unwrap()
                .push((token.to_string(), message.clone()));
            self.acks
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Ok(ApiAck::accepted()))
        }
    }

    fn order() -> OrderRequest {
        OrderRequest {
            customer_name: "Asha Rao".to_string(),
            address: "12 Lake View Rd".to_string(),
            phone: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            social_handle: None,
            pin_code: "560001".to_string(),
            state: "Karnataka".to_string(),
            query: None,
            product_id: ProductId::new("p1"),
            product_name: "Silver Necklace".to_string(),
            submitted_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_successful_delivery() {
        let transport = FakeTransport::replying(Ok(ApiAck::accepted()));
        let dispatcher =
            Dispatcher::with_transport(NotifyConfig::new("123:abc", "-100"), transport.clone());

        let report = dispatcher.notify(Notification::Order(&order())).await;
        assert!(report.delivered);

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "123:abc");
        assert_eq!(sent[0].1.chat_id, "-100");
        assert!(sent[0].1.text.contains("Asha Rao"));
    }

    #[tokio::test]
    async fn test_rejection_carries_upstream_code() {
        let transport =
            FakeTransport::replying(Ok(ApiAck::rejected(403, "bot was blocked by the user")));
        let dispatcher =
            Dispatcher::with_transport(NotifyConfig::new("123:abc", "-100"), transport);

        let report = dispatcher.notify(Notification::Order(&order())).await;
        assert!(!report.delivered);
        assert_eq!(report.error_code, Some(403));
        assert!(report.message.contains("blocked"));
    }

    #[tokio::test]
    async fn test_network_failure_is_a_report_not_a_panic() {
        let transport = FakeTransport::replying(Err(TransportError::Request(
            "connection refused".to_string(),
        )));
        let dispatcher =
            Dispatcher::with_transport(NotifyConfig::new("123:abc", "-100"), transport);

        let report = dispatcher.notify(Notification::Order(&order())).await;
        assert!(!report.delivered);
        assert_eq!(report.error_code, None);
        assert!(report.message.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_missing_config_makes_no_network_call() {
        let transport = FakeTransport::replying(Ok(ApiAck::accepted()));
        let dispatcher = Dispatcher::with_transport(NotifyConfig::default(), transport.clone());

        let report = dispatcher.notify(Notification::Order(&order())).await;
        assert!(!report.delivered);
        assert!(report.message.contains("TROVE_BOT_TOKEN"));
        assert!(transport.sent().is_empty());
    }
}
