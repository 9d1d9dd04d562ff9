//! Initial view heuristic.

use super::{ViewState, ViewStateStore};
use crate::composite::LayerDescriptor;
use crate::pyramid::{PyramidGeometry, PyramidSource};

/// Picks the first view from image geometry.
///
/// Zoomed out to the coarsest level and centered on the base raster of the
/// first descriptor. Runs at most once per store.
///
/// ```
/// use plateview::pyramid::{PyramidGeometry, Shape};
/// use plateview::view::ViewStateInitializer;
///
/// let geometry = PyramidGeometry::new(5, Shape::new(1024, 2048), Shape::new(256, 256)).unwrap();
/// let view = ViewStateInitializer::initial_view(&geometry);
/// assert_eq!(view.zoom, -4.0);
/// assert_eq!(view.target, [1024.0, 512.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewStateInitializer;

impl ViewStateInitializer {
    /// `zoom = -(num_levels - 1)`, `target = (width / 2, height / 2, 0)`.
    pub fn initial_view(geometry: &PyramidGeometry) -> ViewState {
        let base = geometry.base_shape();
        ViewState::new(
            f64::from(geometry.min_zoom()),
            [f64::from(base.width) / 2.0, f64::from(base.height) / 2.0, 0.0],
        )
    }

    /// Initialize `store` from `descriptors` if nothing has been set yet.
    ///
    /// Returns the emitted update, or `None` when the store was already
    /// initialized or there is nothing to measure.
    pub fn run<S: PyramidSource>(
        store: &mut ViewStateStore,
        descriptors: &[LayerDescriptor<S>],
    ) -> Option<ViewState> {
        if store.is_initialized() {
            return None;
        }
        let first = descriptors.first()?;
        let view = Self::initial_view(first.fetcher.geometry());
        store.set(view);
        Some(view)
    }
}
