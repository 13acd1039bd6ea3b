use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use shopfeed_core::{PageResult, PageSource, ShopfeedError, ShopfeedResult};
use shopfeed_domain::{total_price, Product, ProductPage};
use shopfeed_tui::{FeedController, FetchOutcome};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::Notify;

fn product(name: &str, price: u64) -> Product {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    Product::new(name.to_string(), price, date)
}

/// What the scripted source serves for one call, in call order.
enum Step {
    Page(Vec<Product>, bool),
    Fail,
}

/// Hand-rolled page source: serves pre-scripted steps one call at a time
/// and records every requested page index.
struct ScriptedSource {
    steps: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<u32>>,
    /// When set, every fetch parks until the gate is notified.
    gate: Option<Arc<Notify>>,
}

impl ScriptedSource {
    fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    fn gated(steps: Vec<Step>, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(steps)
        }
    }

    fn calls(&self) -> Vec<u32> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource<Product> for ScriptedSource {
    async fn fetch_page(&self, page: u32) -> ShopfeedResult<ProductPage> {
        self.calls.lock().unwrap().push(page);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Page(items, end_of_data)) => Ok(PageResult { items, end_of_data }),
            Some(Step::Fail) | None => Err(ShopfeedError::Fetch {
                page,
                reason: "scripted failure".to_string(),
            }),
        }
    }
}

fn controller_with(
    source: Arc<ScriptedSource>,
) -> (FeedController, UnboundedReceiver<FetchOutcome>) {
    FeedController::new(source)
}

async fn settle(
    controller: &mut FeedController,
    outcome_rx: &mut UnboundedReceiver<FetchOutcome>,
) {
    let outcome = outcome_rx.recv().await.expect("fetch outcome");
    controller.apply(outcome);
}

#[tokio::test]
async fn test_two_page_scenario_merges_in_order_and_stops() {
    let page0 = vec![product("Desk Lamp", 30_000), product("Keyboard", 42_000)];
    let page1 = vec![product("Desk Mat", 9_500)];
    let expected_total = total_price(&page0) + total_price(&page1);
    let expected_names: Vec<String> = page0
        .iter()
        .chain(&page1)
        .map(|p| p.name.clone())
        .collect();

    let source = Arc::new(ScriptedSource::new(vec![
        Step::Page(page0, false),
        Step::Page(page1, true),
    ]));
    let (mut controller, mut outcome_rx) = controller_with(Arc::clone(&source));

    controller.observe_marker(true);
    settle(&mut controller, &mut outcome_rx).await;

    controller.observe_marker(true);
    settle(&mut controller, &mut outcome_rx).await;

    // A further trigger after end-of-data issues no third call.
    controller.observe_marker(true);
    controller.trigger();

    let names: Vec<String> = controller.items().iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, expected_names);
    assert_eq!(controller.item_count(), 3);
    assert_eq!(controller.total_price(), expected_total);
    assert!(controller.is_exhausted());
    assert_eq!(source.calls(), vec![0, 1]);
}

#[tokio::test]
async fn test_second_trigger_while_in_flight_is_suppressed() {
    let gate = Arc::new(Notify::new());
    let source = Arc::new(ScriptedSource::gated(
        vec![Step::Page(vec![product("Speaker", 55_000)], false)],
        Arc::clone(&gate),
    ));
    let (mut controller, mut outcome_rx) = controller_with(Arc::clone(&source));

    controller.trigger();
    // Let the fetch task start and park on the gate.
    tokio::task::yield_now().await;
    assert!(controller.is_loading());

    // Rapid re-intersection while the fetch is still in flight.
    controller.observe_marker(false);
    controller.observe_marker(true);
    controller.trigger();
    tokio::task::yield_now().await;
    assert_eq!(source.calls(), vec![0]);

    gate.notify_one();
    settle(&mut controller, &mut outcome_rx).await;

    assert_eq!(controller.item_count(), 1);
    assert_eq!(source.calls(), vec![0]);
}

#[tokio::test]
async fn test_failure_keeps_cursor_and_retries_same_page() {
    let source = Arc::new(ScriptedSource::new(vec![
        Step::Fail,
        Step::Page(vec![product("Notebook", 4_200)], true),
    ]));
    let (mut controller, mut outcome_rx) = controller_with(Arc::clone(&source));

    controller.observe_marker(true);
    settle(&mut controller, &mut outcome_rx).await;

    // The failure merged nothing and did not advance the cursor.
    assert_eq!(controller.item_count(), 0);
    assert_eq!(controller.total_price(), 0);
    assert!(!controller.is_loading());
    assert_eq!(controller.next_page(), 0);

    // The sentinel was re-armed by the settled failure, so the still
    // visible marker re-attempts the same page.
    controller.observe_marker(true);
    settle(&mut controller, &mut outcome_rx).await;

    assert_eq!(source.calls(), vec![0, 0]);
    assert_eq!(controller.item_count(), 1);
    assert!(controller.is_exhausted());
}

#[tokio::test]
async fn test_accumulated_count_matches_sum_of_page_counts() {
    let pages = vec![
        vec![product("A", 1), product("B", 2), product("C", 3)],
        vec![product("D", 4)],
        vec![product("E", 5), product("F", 6)],
    ];
    let total_count: usize = pages.iter().map(|p| p.len()).sum();
    let steps: Vec<Step> = pages
        .iter()
        .enumerate()
        .map(|(i, items)| Step::Page(items.clone(), i == pages.len() - 1))
        .collect();

    let source = Arc::new(ScriptedSource::new(steps));
    let (mut controller, mut outcome_rx) = controller_with(Arc::clone(&source));

    for _ in 0..pages.len() {
        controller.observe_marker(true);
        settle(&mut controller, &mut outcome_rx).await;
    }

    assert_eq!(controller.item_count(), total_count);
    assert_eq!(source.calls(), vec![0, 1, 2]);

    // Page k's items appear before page k+1's.
    let names: Vec<String> = controller.items().iter().map(|p| p.name.clone()).collect();
    let expected: Vec<String> = pages
        .iter()
        .flatten()
        .map(|p| p.name.clone())
        .collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_exhausted_feed_ignores_every_further_trigger() {
    let source = Arc::new(ScriptedSource::new(vec![Step::Page(
        vec![product("Charger", 12_000)],
        true,
    )]));
    let (mut controller, mut outcome_rx) = controller_with(Arc::clone(&source));

    controller.trigger();
    settle(&mut controller, &mut outcome_rx).await;
    assert!(controller.is_exhausted());

    for _ in 0..5 {
        controller.observe_marker(false);
        controller.observe_marker(true);
        controller.trigger();
    }
    tokio::task::yield_now().await;

    assert_eq!(source.calls(), vec![0]);
}

#[tokio::test]
async fn test_total_price_tracks_the_full_accumulated_sequence() {
    let source = Arc::new(ScriptedSource::new(vec![
        Step::Page(vec![product("A", 10), product("B", 20)], false),
        Step::Page(vec![product("C", 5)], false),
    ]));
    let (mut controller, mut outcome_rx) = controller_with(Arc::clone(&source));

    controller.trigger();
    settle(&mut controller, &mut outcome_rx).await;
    assert_eq!(controller.total_price(), 30);

    controller.trigger();
    settle(&mut controller, &mut outcome_rx).await;
    assert_eq!(controller.total_price(), 35);
    assert_eq!(controller.total_price(), total_price(controller.items()));
}
