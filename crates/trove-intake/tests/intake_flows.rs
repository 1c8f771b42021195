//! End-to-end intake flow tests over in-memory stores and a recording
//! transport.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use trove_commerce::catalog::Category;
use trove_commerce::validate::{OrderInput, ProductInput, WishInput};
use trove_commerce::ProductId;
use trove_intake::{Intake, IntakeError};
use trove_notify::{ApiAck, Dispatcher, NotifyConfig, OutboundMessage, Transport, TransportError};
use trove_store::{Catalog, MemoryOrderStore, MemoryStore, OrderRecordStore, ProductStore};

/// Records every delivery and answers with a configurable ack.
#[derive(Default)]
struct RecordingTransport {
    reject_with: Mutex<Option<(i64, String)>>,
    sent: Mutex<Vec<OutboundMessage>>,
}

impl RecordingTransport {
    fn accepting() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn rejecting(code: i64, description: &str) -> Arc<Self> {
        Arc::new(Self {
            reject_with: Mutex::new(Some((code, description.to_string()))),
            sent: Mutex::new(Vec::new()),
        })
    }

    fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn deliver(
        &self,
        _token: &str,
        message: &OutboundMessage,
    ) -> Result<ApiAck, TransportError> {
        self.sent.lock().unwrap().push(message.clone());
        match self.reject_with.lock().unwrap().clone() {
            Some((code, description)) => Ok(ApiAck::rejected(code, description)),
            None => Ok(ApiAck::accepted()),
        }
    }
}

struct Harness {
    intake: Intake,
    products: Arc<MemoryStore>,
    orders: Arc<MemoryOrderStore>,
    transport: Arc<RecordingTransport>,
}

fn harness(transport: Arc<RecordingTransport>) -> Harness {
    let products = Arc::new(MemoryStore::new());
    let orders = Arc::new(MemoryOrderStore::new());
    let dispatcher = Dispatcher::with_transport(
        NotifyConfig::new("123:abc", "-100200300"),
        transport.clone(),
    );
    let intake = Intake::new(
        Catalog::new(products.clone()),
        orders.clone(),
        dispatcher,
    );
    Harness {
        intake,
        products,
        orders,
        transport,
    }
}

fn necklace_input() -> ProductInput {
    ProductInput {
        name: Some("Silver Necklace".to_string()),
        category: Some("jewelry".to_string()),
        price: Some(120.0),
        image_url: Some("https://x/img.png".to_string()),
        ai_hint: Some("silver necklace".to_string()),
        ..ProductInput::default()
    }
}

fn order_input(product_id: &str) -> OrderInput {
    OrderInput {
        customer_name: Some("Asha Rao".to_string()),
        address: Some("12 Lake View Rd".to_string()),
        phone: Some("9876543210".to_string()),
        email: Some("asha@example.com".to_string()),
        pin_code: Some("560001".to_string()),
        state: Some("Karnataka".to_string()),
        product_id: Some(product_id.to_string()),
        product_name: Some("Silver Necklace".to_string()),
        ..OrderInput::default()
    }
}

fn wish_input(description: &str) -> WishInput {
    WishInput {
        category: Some("books".to_string()),
        description: Some(description.to_string()),
        image_provided: Some(false),
        full_name: Some("Ravi Kumar".to_string()),
        contact_number: Some("+91 98765 43210".to_string()),
    }
}

#[tokio::test]
async fn invalid_phone_writes_nothing_and_sends_nothing() {
    let h = harness(RecordingTransport::accepting());
    let product = h.intake.add_product(&necklace_input()).unwrap();
    h.transport.sent.lock().unwrap().clear();

    let mut input = order_input(product.id.as_str());
    input.phone = Some("12".to_string());

    let err = h.intake.submit_order(&input).await.unwrap_err();
    let fields = err.field_errors().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].field, "phone");

    assert!(h.orders.load_last().unwrap().is_none());
    assert!(h.transport.sent().is_empty());
}

#[tokio::test]
async fn order_for_unknown_product_is_not_found() {
    let h = harness(RecordingTransport::accepting());

    let err = h.intake.submit_order(&order_input("no-such-id")).await.unwrap_err();
    assert!(matches!(err, IntakeError::NotFound(_)));
    assert!(h.orders.load_last().unwrap().is_none());
    assert!(h.transport.sent().is_empty());
}

#[tokio::test]
async fn successful_order_persists_and_notifies() {
    let h = harness(RecordingTransport::accepting());
    let product = h.intake.add_product(&necklace_input()).unwrap();

    let outcome = h
        .intake
        .submit_order(&order_input(product.id.as_str()))
        .await
        .unwrap();
    assert!(outcome.notified);
    assert_eq!(outcome.delivery_warning, None);
    assert_eq!(outcome.record.customer_name, "Asha Rao");

    let stored = h.orders.load_last().unwrap().unwrap();
    assert_eq!(stored, outcome.record);

    let sent = h.transport.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text.contains("Asha Rao"));
    assert!(sent[0].text.contains("Silver Necklace"));
}

#[tokio::test]
async fn delivery_failure_still_accepts_the_order() {
    let h = harness(RecordingTransport::rejecting(502, "gateway unavailable"));
    let product = h.intake.add_product(&necklace_input()).unwrap();

    let outcome = h
        .intake
        .submit_order(&order_input(product.id.as_str()))
        .await
        .unwrap();

    // Degraded success: recorded, not notified.
    assert!(!outcome.notified);
    assert!(outcome.delivery_warning.unwrap().contains("gateway"));
    assert!(h.orders.load_last().unwrap().is_some());
}

#[tokio::test]
async fn persistence_failure_stops_before_notification() {
    let h = harness(RecordingTransport::accepting());
    let product = h.intake.add_product(&necklace_input()).unwrap();
    h.transport.sent.lock().unwrap().clear();

    h.orders.fail_next_save();
    let err = h
        .intake
        .submit_order(&order_input(product.id.as_str()))
        .await
        .unwrap_err();
    assert!(matches!(err, IntakeError::Persistence(_)));
    assert!(h.transport.sent().is_empty());
}

#[tokio::test]
async fn wish_sends_exactly_one_escaped_notification() {
    let h = harness(RecordingTransport::accepting());

    let outcome = h
        .intake
        .submit_wish(&wish_input("signed *first* edition (hardcover)!"))
        .await
        .unwrap();
    assert!(outcome.notified);

    let sent = h.transport.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text.contains(r"signed \*first\* edition \(hardcover\)\!"));
}

#[tokio::test]
async fn wish_delivery_failure_is_still_accepted() {
    let h = harness(RecordingTransport::rejecting(403, "bot was blocked"));

    let outcome = h
        .intake
        .submit_wish(&wish_input("a brass astrolabe"))
        .await
        .unwrap();
    assert!(!outcome.notified);
    assert!(outcome.delivery_warning.unwrap().contains("blocked"));
}

#[tokio::test]
async fn wish_validation_failure_sends_nothing() {
    let h = harness(RecordingTransport::accepting());

    let mut input = wish_input("x");
    input.description = None;
    let err = h.intake.submit_wish(&input).await.unwrap_err();
    assert!(err.field_errors().is_some());
    assert!(h.transport.sent().is_empty());
}

#[tokio::test]
async fn admin_end_to_end_silver_necklace() {
    let h = harness(RecordingTransport::accepting());

    let product = h.intake.add_product(&necklace_input()).unwrap();
    assert!(!product.id.as_str().is_empty());
    assert_eq!(product.category, Category::Jewelry);

    let jewelry = h.intake.catalog().get_by_category(Category::Jewelry).unwrap();
    assert!(jewelry.iter().any(|p| p.id == product.id));

    let deleted = h.intake.delete_product(&product.id).unwrap();
    assert_eq!(deleted.id, product.id);
    assert!(h.intake.catalog().get_by_id(&product.id).unwrap().is_none());

    // The durable file state matches: store reads back empty.
    assert!(h.products.load().unwrap().is_empty());
}

#[tokio::test]
async fn admin_update_unknown_id_is_not_found_not_validation() {
    let h = harness(RecordingTransport::accepting());

    let err = h
        .intake
        .update_product(&ProductId::new("missing"), &necklace_input())
        .unwrap_err();
    assert!(matches!(err, IntakeError::NotFound(_)));
    assert!(err.field_errors().is_none());
}

#[tokio::test]
async fn admin_rejects_invalid_fields_per_field() {
    let h = harness(RecordingTransport::accepting());

    let mut input = necklace_input();
    input.price = Some(-1.0);
    input.image_url = Some("not-a-url".to_string());

    let err = h.intake.add_product(&input).unwrap_err();
    let fields: Vec<&str> = err
        .field_errors()
        .unwrap()
        .iter()
        .map(|e| e.field.as_str())
        .collect();
    assert_eq!(fields, vec!["price", "imageUrl"]);
    assert!(h.intake.catalog().get_all().unwrap().is_empty());
}
