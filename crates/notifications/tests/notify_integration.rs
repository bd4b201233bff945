//! Integration tests for the notification dispatcher against the in-memory
//! store: live delivery, filtering, dedupe across the pump, and teardown.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::NaiveDate;
use common::{Kind, Money, ProductId, RequestId, Status, UserId};
use domain::{BookingService, Cart, DeliveryInfo, Product, Skill, Worker};
use notifications::{CacheInvalidator, Dispatcher, NotificationSink};
use request_store::{InMemoryRequestStore, RequestStore};

#[derive(Default)]
struct RecordingSink {
    notified: Mutex<Vec<(String, RequestId, Kind)>>,
}

impl RecordingSink {
    fn messages(&self) -> Vec<String> {
        self.notified
            .lock()
            .unwrap()
            .iter()
            .map(|(m, _, _)| m.clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.notified.lock().unwrap().len()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str, request_id: RequestId, kind: Kind) {
        self.notified
            .lock()
            .unwrap()
            .push((message.to_string(), request_id, kind));
    }
}

#[derive(Default)]
struct RecordingCache {
    keys: Mutex<Vec<&'static str>>,
}

impl CacheInvalidator for RecordingCache {
    fn invalidate(&self, kind: Kind) {
        self.keys.lock().unwrap().push(kind.cache_key());
    }
}

async fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached within deadline");
}

fn seed() -> Product {
    Product {
        id: ProductId::new("seed-1"),
        name: "Paddy Seed".to_string(),
        price: Money::from_rupees(100),
        unit: "kg".to_string(),
        is_subsidized: true,
        subsidy_percent: 20,
    }
}

fn delivery() -> DeliveryInfo {
    DeliveryInfo {
        address: "Village Rd, Palakkad".to_string(),
        notes: None,
    }
}

#[tokio::test]
async fn subscriber_receives_message_and_cache_key_for_own_request() {
    let store = InMemoryRequestStore::new();
    let service = BookingService::new(store.clone());
    let requester = UserId::new();

    let sink = Arc::new(RecordingSink::default());
    let cache = Arc::new(RecordingCache::default());
    let dispatcher = Dispatcher::new(sink.clone(), cache.clone());
    let _handle = dispatcher.subscribe(&store, requester).await.unwrap();

    let mut cart = Cart::new();
    cart.add_line(&seed());
    let request = service.place_order(requester, &cart, delivery()).await.unwrap();

    store
        .update_status(
            request.id,
            Kind::InputOrder,
            Status::Requested,
            Status::Accepted,
        )
        .await
        .unwrap();

    wait_until(|| sink.len() == 1).await;

    let notified = sink.notified.lock().unwrap();
    assert_eq!(notified[0].0, "Your order has been accepted!");
    assert_eq!(notified[0].1, request.id);
    assert_eq!(notified[0].2, Kind::InputOrder);
    drop(notified);

    assert_eq!(*cache.keys.lock().unwrap(), vec!["orders"]);
}

#[tokio::test]
async fn other_users_changes_are_not_delivered() {
    let store = InMemoryRequestStore::new();
    let service = BookingService::new(store.clone());
    let subscriber = UserId::new();
    let other = UserId::new();

    let sink = Arc::new(RecordingSink::default());
    let cache = Arc::new(RecordingCache::default());
    let dispatcher = Dispatcher::new(sink.clone(), cache.clone());
    let _handle = dispatcher.subscribe(&store, subscriber).await.unwrap();

    let mut cart = Cart::new();
    cart.add_line(&seed());
    let theirs = service.place_order(other, &cart, delivery()).await.unwrap();
    let mine = service.place_order(subscriber, &cart, delivery()).await.unwrap();

    store
        .update_status(theirs.id, Kind::InputOrder, Status::Requested, Status::Accepted)
        .await
        .unwrap();
    store
        .update_status(mine.id, Kind::InputOrder, Status::Requested, Status::Accepted)
        .await
        .unwrap();

    wait_until(|| sink.len() == 1).await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    // Only the subscriber's own change arrived.
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.notified.lock().unwrap()[0].1, mine.id);
}

#[tokio::test]
async fn each_lifecycle_step_produces_its_own_message() {
    let store = InMemoryRequestStore::new();
    let service = BookingService::new(store.clone());
    let requester = UserId::new();

    let sink = Arc::new(RecordingSink::default());
    let cache = Arc::new(RecordingCache::default());
    let dispatcher = Dispatcher::new(sink.clone(), cache.clone());
    let _handle = dispatcher.subscribe(&store, requester).await.unwrap();

    let worker = Worker {
        id: "w-1".to_string(),
        full_name: "Ravi Kumar".to_string(),
        skill: Skill::Harvesting,
        daily_rate: Money::from_rupees(600),
    };
    let request = service
        .hire_labor(
            requester,
            &worker,
            domain::LaborSchedule {
                booking_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
                days_required: 2,
                location: "South field".to_string(),
                notes: None,
            },
        )
        .await
        .unwrap();

    for (expected, next) in [
        (Status::Requested, Status::Accepted),
        (Status::Accepted, Status::InProgress),
        (Status::InProgress, Status::Completed),
    ] {
        store
            .update_status(request.id, Kind::Labor, expected, next)
            .await
            .unwrap();
    }

    wait_until(|| sink.len() == 3).await;

    assert_eq!(
        sink.messages(),
        vec![
            "Labor booking confirmed!",
            "Worker is on the job",
            "Work completed successfully!",
        ]
    );
    assert_eq!(
        *cache.keys.lock().unwrap(),
        vec!["labor-bookings", "labor-bookings", "labor-bookings"]
    );
}

#[tokio::test]
async fn unsubscribe_stops_delivery_and_is_idempotent() {
    let store = InMemoryRequestStore::new();
    let service = BookingService::new(store.clone());
    let requester = UserId::new();

    let sink = Arc::new(RecordingSink::default());
    let cache = Arc::new(RecordingCache::default());
    let dispatcher = Dispatcher::new(sink.clone(), cache.clone());
    let mut handle = dispatcher.subscribe(&store, requester).await.unwrap();
    assert!(handle.is_active());

    let mut cart = Cart::new();
    cart.add_line(&seed());
    let request = service.place_order(requester, &cart, delivery()).await.unwrap();

    handle.unsubscribe();
    assert!(!handle.is_active());
    handle.unsubscribe();

    store
        .update_status(request.id, Kind::InputOrder, Status::Requested, Status::Accepted)
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(sink.len(), 0);
    assert!(cache.keys.lock().unwrap().is_empty());
}

#[tokio::test]
async fn dropping_the_handle_stops_delivery() {
    let store = InMemoryRequestStore::new();
    let service = BookingService::new(store.clone());
    let requester = UserId::new();

    let sink = Arc::new(RecordingSink::default());
    let cache = Arc::new(RecordingCache::default());
    let dispatcher = Dispatcher::new(sink.clone(), cache.clone());

    let handle = dispatcher.subscribe(&store, requester).await.unwrap();
    let mut cart = Cart::new();
    cart.add_line(&seed());
    let request = service.place_order(requester, &cart, delivery()).await.unwrap();
    drop(handle);

    store
        .update_status(request.id, Kind::InputOrder, Status::Requested, Status::Accepted)
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(sink.len(), 0);
}

#[tokio::test]
async fn two_subscribers_receive_their_own_changes_independently() {
    let store = InMemoryRequestStore::new();
    let service = BookingService::new(store.clone());
    let alpha = UserId::new();
    let beta = UserId::new();

    let sink_a = Arc::new(RecordingSink::default());
    let sink_b = Arc::new(RecordingSink::default());
    let cache = Arc::new(RecordingCache::default());

    let dispatcher_a = Dispatcher::new(sink_a.clone(), cache.clone());
    let dispatcher_b = Dispatcher::new(sink_b.clone(), cache.clone());
    let _ha = dispatcher_a.subscribe(&store, alpha).await.unwrap();
    let _hb = dispatcher_b.subscribe(&store, beta).await.unwrap();

    let mut cart = Cart::new();
    cart.add_line(&seed());
    let a_req = service.place_order(alpha, &cart, delivery()).await.unwrap();
    let b_req = service.place_order(beta, &cart, delivery()).await.unwrap();

    store
        .update_status(a_req.id, Kind::InputOrder, Status::Requested, Status::Accepted)
        .await
        .unwrap();
    store
        .update_status(b_req.id, Kind::InputOrder, Status::Requested, Status::Cancelled)
        .await
        .unwrap();

    wait_until(|| sink_a.len() == 1 && sink_b.len() == 1).await;

    assert_eq!(sink_a.notified.lock().unwrap()[0].1, a_req.id);
    assert_eq!(sink_a.messages(), vec!["Your order has been accepted!"]);
    assert_eq!(sink_b.notified.lock().unwrap()[0].1, b_req.id);
    assert_eq!(sink_b.messages(), vec!["Your order has been cancelled"]);
}
