// SPDX-License-Identifier: MPL-2.0
//! Load controller driven end to end by a scripted gallery source.

use futures_util::future::BoxFuture;
use iced_gallery::application::port::{GallerySource, ImageResult, PageResult};
use iced_gallery::domain::gallery::{GalleryItem, ItemDetails, PageRequest, PageSize};
use iced_gallery::error::FetchError;
use iced_gallery::ui::gallery::{Effect, LoadController, Presentation, Resolution, ViewState};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Replays queued page results and counts calls.
#[derive(Default)]
struct FakeSource {
    script: Mutex<VecDeque<PageResult>>,
    requests: Mutex<Vec<PageRequest>>,
    calls: AtomicUsize,
}

impl FakeSource {
    fn scripted(results: impl IntoIterator<Item = PageResult>) -> Self {
        Self {
            script: Mutex::new(results.into_iter().collect()),
            ..Self::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GallerySource for FakeSource {
    fn fetch_page(&self, request: PageRequest) -> BoxFuture<'static, PageResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(FetchError::Network("script exhausted".into())));
        Box::pin(async move { next })
    }

    fn fetch_image(&self, _url: &str) -> BoxFuture<'static, ImageResult> {
        Box::pin(async { Err(FetchError::Empty) })
    }
}

fn item(n: usize) -> GalleryItem {
    GalleryItem::new(
        n.to_string(),
        format!("Photo {n}"),
        format!("https://tong.visitkorea.or.kr/{n}.jpg"),
        ItemDetails::default(),
    )
}

fn items(count: usize) -> Vec<GalleryItem> {
    (1..=count).map(item).collect()
}

/// Runs one effect against the source and feeds the result back.
async fn drive(
    controller: &mut LoadController,
    source: &FakeSource,
    effect: Effect,
) -> Option<Resolution> {
    match effect {
        Effect::None => None,
        Effect::Fetch {
            generation,
            request,
        } => {
            let result = source.fetch_page(request).await;
            Some(controller.resolve(generation, result))
        }
    }
}

#[tokio::test]
async fn successful_load_shows_ten_rows_in_order() {
    let source = FakeSource::scripted([Ok(items(10))]);
    let mut controller = LoadController::new(PageSize::new(10));
    assert_eq!(Presentation::of(controller.state()), Presentation::Spinner);

    let effect = controller.start();
    drive(&mut controller, &source, effect).await;

    assert_eq!(controller.state(), &ViewState::Loaded(items(10)));
    assert_eq!(
        Presentation::of(controller.state()),
        Presentation::List { rows: 10 }
    );
    let request = source.requests.lock().unwrap()[0];
    assert_eq!(request.page.value(), 1);
    assert_eq!(request.size.value(), 10);
}

#[tokio::test]
async fn server_error_shows_status() {
    let source = FakeSource::scripted([Err(FetchError::Server(500))]);
    let mut controller = LoadController::default();

    let effect = controller.start();
    drive(&mut controller, &source, effect).await;

    assert_eq!(
        controller.state(),
        &ViewState::Failed("server error: 500".into())
    );
    assert_eq!(Presentation::of(controller.state()), Presentation::ErrorPanel);
}

#[tokio::test]
async fn timeout_shows_network_error() {
    let source = FakeSource::scripted([Err(FetchError::Network("timeout".into()))]);
    let mut controller = LoadController::default();

    let effect = controller.start();
    drive(&mut controller, &source, effect).await;

    assert_eq!(
        controller.state(),
        &ViewState::Failed("network error: timeout".into())
    );
    assert_eq!(Presentation::of(controller.state()), Presentation::ErrorPanel);
}

#[tokio::test]
async fn empty_page_shows_no_data() {
    let source = FakeSource::scripted([Err(FetchError::Empty)]);
    let mut controller = LoadController::default();

    let effect = controller.start();
    drive(&mut controller, &source, effect).await;

    assert_eq!(
        controller.state(),
        &ViewState::Failed("no data available".into())
    );
}

#[tokio::test]
async fn retry_from_failure_passes_through_loading() {
    let source = FakeSource::scripted([Err(FetchError::Server(503)), Ok(items(3))]);
    let mut controller = LoadController::default();
    let mut history = vec![controller.state().clone()];

    let effect = controller.start();
    drive(&mut controller, &source, effect).await;
    history.push(controller.state().clone());

    let effect = controller.retry();
    history.push(controller.state().clone());
    drive(&mut controller, &source, effect).await;
    history.push(controller.state().clone());

    assert_eq!(
        history,
        vec![
            ViewState::Loading,
            ViewState::Failed("server error: 503".into()),
            ViewState::Loading,
            ViewState::Loaded(items(3)),
        ]
    );
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn repeated_retry_while_loading_fetches_once() {
    let source = FakeSource::scripted([Ok(items(2))]);
    let mut controller = LoadController::default();

    let effect = controller.start();
    for _ in 0..5 {
        assert_eq!(controller.retry(), Effect::None);
    }
    drive(&mut controller, &source, effect).await;

    assert_eq!(source.calls(), 1);
    assert_eq!(controller.state(), &ViewState::Loaded(items(2)));
}

#[tokio::test]
async fn late_result_after_detach_is_dropped() {
    let source = FakeSource::scripted([Ok(items(1))]);
    let mut controller = LoadController::default();

    let effect = controller.start();
    controller.detach();
    let resolution = drive(&mut controller, &source, effect).await;

    assert_eq!(resolution, Some(Resolution::Discarded));
    assert_eq!(controller.state(), &ViewState::Loading);
}

#[tokio::test]
async fn success_after_failure_leaves_no_error_behind() {
    let source = FakeSource::scripted([Err(FetchError::Network("timeout".into())), Ok(items(1))]);
    let mut controller = LoadController::default();

    let effect = controller.start();
    drive(&mut controller, &source, effect).await;
    assert!(controller.failure().is_some());

    let effect = controller.retry();
    drive(&mut controller, &source, effect).await;

    assert_eq!(controller.state(), &ViewState::Loaded(items(1)));
    assert!(controller.failure().is_none());
}
