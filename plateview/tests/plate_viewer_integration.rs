//! Integration tests for the plate viewer workflow.
//!
//! These tests drive the public API end to end:
//! - Session composition of single images and plates
//! - Tile fetching through the per-layer adapters
//! - Click decoding into navigation links
//! - One-shot view initialization
//! - Tile faults reported back to the loader

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use plateview::config::ViewerConfig;
use plateview::interaction::Decoded;
use plateview::log::{LogLevel, MemoryLogger, NoOpLogger};
use plateview::pyramid::{ChunkError, InMemoryPyramid, PyramidSource, RawChunk, Shape};
use plateview::session::{ImageConfig, SessionError, ViewerSession};
use plateview::tile::{TileError, TileRequest, TileResult};
use plateview::view::ViewState;

// =============================================================================
// Test Helpers
// =============================================================================

/// A well whose chunks are solid grey, counting reads and remembering
/// reported faults. Level 0 chunk (1, 1) fails with an I/O error.
struct WellSource {
    id: String,
    reads: AtomicUsize,
    reported: Mutex<Vec<TileError>>,
}

impl WellSource {
    fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            reads: AtomicUsize::new(0),
            reported: Mutex::new(Vec::new()),
        }
    }
}

impl PyramidSource for WellSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn num_levels(&self) -> u32 {
        3
    }

    fn base_shape(&self) -> Shape {
        Shape::new(256, 256)
    }

    fn chunk_shape(&self) -> Shape {
        Shape::new(64, 64)
    }

    async fn get_raw_chunk(
        &self,
        level: u32,
        tile_y: u32,
        tile_x: u32,
        _channel: u32,
    ) -> Result<RawChunk, ChunkError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        if (level, tile_y, tile_x) == (0, 1, 1) {
            return Err(ChunkError::Io("connection reset".to_string()));
        }
        Ok(RawChunk::new(vec![128; 64 * 64], 64, 64))
    }

    fn on_tile_error(&self, error: &TileError) {
        self.reported.lock().unwrap().push(error.clone());
    }
}

fn wells(n: usize) -> Vec<Arc<WellSource>> {
    (0..n)
        .map(|i| Arc::new(WellSource::new(format!("well-{}", i))))
        .collect()
}

fn session() -> ViewerSession<WellSource> {
    ViewerSession::new(&ViewerConfig::default(), Arc::new(NoOpLogger))
}

// =============================================================================
// Composition
// =============================================================================

#[test]
fn test_plate_of_96_wells() {
    let mut session = session();
    let plate = session.add_image(ImageConfig::plate(8, 12, wells(96)));

    let frame = session.render().unwrap();

    assert_eq!(frame.layers.len(), 96);
    assert_eq!(frame.layers[0].id, format!("{}-plate-0-0", plate));
    assert_eq!(frame.layers[95].id, format!("{}-plate-7-11", plate));

    // 256 px wells with a 5 px spacer
    assert_eq!(frame.layers[0].translation, [-(12.0 * 261.0) / 2.0, -(8.0 * 261.0) / 2.0]);
    assert!(frame.layers.iter().all(|d| d.pickable));
}

#[test]
fn test_mismatched_plate_yields_no_frame() {
    let mut session = session();
    session.add_image(ImageConfig::single(Arc::new(WellSource::new("overview"))));
    session.add_image(ImageConfig::plate(2, 3, wells(9)));

    assert!(matches!(session.render(), Err(SessionError::Composite(_))));
    assert!(session.view_state().is_none());
}

#[test]
fn test_repeated_renders_are_content_equal() {
    let mut session = session();
    session.add_image(ImageConfig::single(Arc::new(WellSource::new("a"))));
    session.add_image(ImageConfig::plate(2, 2, wells(4)));

    let first = session.render().unwrap();
    let second = session.render().unwrap();
    assert_eq!(first.layers, second.layers);
}

// =============================================================================
// View state
// =============================================================================

#[test]
fn test_view_initialized_once() {
    let mut session = session();
    session.add_image(ImageConfig::single(Arc::new(WellSource::new("a"))));

    let initial = session.render().unwrap().view_state;
    assert_eq!(initial, Some(ViewState::new(-2.0, [128.0, 128.0, 0.0])));

    let manual = ViewState::new(0.0, [10.0, 10.0, 0.0]);
    session.set_view_state(manual);
    session.add_image(ImageConfig::single(Arc::new(WellSource::new("b"))));
    assert_eq!(session.render().unwrap().view_state, Some(manual));
}

// =============================================================================
// Tiles
// =============================================================================

#[tokio::test]
async fn test_tiles_through_descriptors() {
    let mut session = session();
    session.add_image(ImageConfig::plate(1, 2, wells(2)));
    let frame = session.render().unwrap();
    let fetcher = &frame.layers[0].fetcher;

    let image = fetcher
        .fetch(&TileRequest::new(0, 0, 0))
        .await
        .unwrap()
        .into_image()
        .unwrap();
    assert_eq!((image.width(), image.height(), image.channels()), (64, 64, 1));

    // Level 2 is 64×64: a single tile
    assert!(fetcher.fetch(&TileRequest::new(1, 0, -2)).await.unwrap().is_absent());
    assert!(fetcher.fetch(&TileRequest::new(-1, 0, 0)).await.unwrap().is_absent());
}

#[tokio::test]
async fn test_concurrent_fetches_route_by_request() {
    let sources = wells(1);
    let mut session = session();
    session.add_image(ImageConfig::single(Arc::clone(&sources[0])));
    let frame = session.render().unwrap();
    let fetcher = frame.layers[0].fetcher.clone();

    let requests: Vec<TileRequest> = (0..4)
        .flat_map(|y| (0..4).map(move |x| TileRequest::new(x, y, 0)))
        .collect();
    let results = fetcher.fetch_many(&requests).await;

    assert_eq!(results.len(), 16);
    for (request, result) in &results {
        if (request.x(), request.y()) == (1, 1) {
            assert!(matches!(result, Err(TileError::FetchFailed { .. })));
        } else {
            assert!(matches!(result, Ok(TileResult::Image(_))));
        }
    }
    assert_eq!(sources[0].reads.load(Ordering::SeqCst), 16);
}

#[tokio::test]
async fn test_tile_fault_reported_to_loader() {
    let source = Arc::new(WellSource::new("faulty"));
    let mut session = session();
    session.add_image(ImageConfig::single(Arc::clone(&source)));
    let frame = session.render().unwrap();
    let fetcher = &frame.layers[0].fetcher;

    let error = fetcher.fetch(&TileRequest::new(1, 1, 0)).await.unwrap_err();
    match &error {
        TileError::FetchFailed {
            source_id, chunk, ..
        } => {
            assert_eq!(source_id, "faulty");
            assert_eq!((chunk.level, chunk.row, chunk.col), (0, 1, 1));
        }
        other => panic!("expected FetchFailed, got {:?}", other),
    }

    fetcher.report_tile_error(&error);
    assert_eq!(source.reported.lock().unwrap().as_slice(), &[error]);
}

#[tokio::test]
async fn test_in_memory_plate_missing_level() {
    let wells: Vec<Arc<InMemoryPyramid>> = (0..4)
        .map(|i| {
            Arc::new(
                InMemoryPyramid::gradient(format!("w{}", i), 2, Shape::new(64, 64), Shape::new(32, 32))
                    .unwrap()
                    .without_level(1),
            )
        })
        .collect();
    let mut session: ViewerSession<InMemoryPyramid> =
        ViewerSession::new(&ViewerConfig::default(), Arc::new(NoOpLogger));
    session.add_image(ImageConfig::plate(2, 2, wells));

    let frame = session.render().unwrap();
    for descriptor in &frame.layers {
        let coarse = descriptor.fetcher.fetch(&TileRequest::new(0, 0, -1)).await.unwrap();
        assert!(coarse.is_absent());
        let fine = descriptor.fetcher.fetch(&TileRequest::new(1, 1, 0)).await.unwrap();
        assert!(fine.image().is_some());
    }
}

// =============================================================================
// Interaction
// =============================================================================

#[test]
fn test_click_on_well_navigates() {
    let config = ViewerConfig::default()
        .with_origin("https://viewer.example.org")
        .with_field_path("Field_2");
    let mut session: ViewerSession<WellSource> = ViewerSession::new(&config, Arc::new(NoOpLogger));
    session.add_image(
        ImageConfig::plate(2, 3, wells(6)).with_locator("https://data.example.org/plate.zarr"),
    );

    let frame = session.render().unwrap();
    let well = &frame.layers[5];

    match well.click() {
        Decoded::Navigate(request) => {
            assert_eq!((request.row, request.col), (1, 2));
            assert_eq!(
                session.navigation_url(&request),
                "https://viewer.example.org?source=https://data.example.org/plate.zarr/0/B/3/Field_2/"
            );
        }
        Decoded::NotApplicable => panic!("well click was ignored"),
    }
}

#[test]
fn test_click_on_single_image_is_ignored() {
    let logger = Arc::new(MemoryLogger::new());
    let mut session: ViewerSession<WellSource> =
        ViewerSession::new(&ViewerConfig::default(), logger.clone());
    session.add_image(ImageConfig::single(Arc::new(WellSource::new("a"))).with_locator("s3://a"));

    let frame = session.render().unwrap();
    assert_eq!(frame.layers[0].click(), Decoded::NotApplicable);
    assert_eq!(
        session.handle_click(&frame.layers[0].pick_event()),
        Decoded::NotApplicable
    );
    assert!(!logger.messages_at(LogLevel::Debug).is_empty());
}
