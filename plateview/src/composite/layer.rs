//! Layer states and renderer-facing descriptors.

use std::fmt;
use std::sync::Arc;

use crate::interaction::{ClickHandler, Decoded, PickEvent};
use crate::layout::CellId;
use crate::pyramid::PyramidSource;
use crate::tile::TileFetchAdapter;

/// What an image layer shows.
#[derive(Debug)]
pub enum LayerContent<S> {
    /// One multiscale image
    Single(Arc<S>),
    /// A plate of `rows × columns` wells, sources in row-major order
    Plate {
        rows: u32,
        columns: u32,
        sources: Vec<Arc<S>>,
    },
}

impl<S> LayerContent<S> {
    /// The source whose geometry represents the layer.
    pub fn first_source(&self) -> Option<&Arc<S>> {
        match self {
            LayerContent::Single(source) => Some(source),
            LayerContent::Plate { sources, .. } => sources.first(),
        }
    }

    pub fn is_plate(&self) -> bool {
        matches!(self, LayerContent::Plate { .. })
    }
}

impl<S> Clone for LayerContent<S> {
    fn clone(&self) -> Self {
        match self {
            LayerContent::Single(source) => LayerContent::Single(Arc::clone(source)),
            LayerContent::Plate {
                rows,
                columns,
                sources,
            } => LayerContent::Plate {
                rows: *rows,
                columns: *columns,
                sources: sources.clone(),
            },
        }
    }
}

/// A loaded image layer.
#[derive(Debug)]
pub struct ImageLayer<S> {
    /// Base id; plate cells derive theirs from it
    pub id: String,
    /// Locator the image was loaded from, used to build well links
    pub locator: Option<String>,
    pub content: LayerContent<S>,
    /// Hidden layers produce no descriptors
    pub visible: bool,
}

impl<S> ImageLayer<S> {
    /// A visible layer.
    pub fn new(id: impl Into<String>, content: LayerContent<S>) -> Self {
        Self {
            id: id.into(),
            locator: None,
            content,
            visible: true,
        }
    }

    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.locator = Some(locator.into());
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

impl<S> Clone for ImageLayer<S> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            locator: self.locator.clone(),
            content: self.content.clone(),
            visible: self.visible,
        }
    }
}

/// Readiness of a layer slot.
#[derive(Debug)]
pub enum LayerState<S> {
    /// Reserved, still loading
    NotReady,
    Ready(ImageLayer<S>),
}

impl<S> LayerState<S> {
    pub fn is_ready(&self) -> bool {
        matches!(self, LayerState::Ready(_))
    }

    pub fn layer(&self) -> Option<&ImageLayer<S>> {
        match self {
            LayerState::Ready(layer) => Some(layer),
            LayerState::NotReady => None,
        }
    }

    pub fn layer_mut(&mut self) -> Option<&mut ImageLayer<S>> {
        match self {
            LayerState::Ready(layer) => Some(layer),
            LayerState::NotReady => None,
        }
    }
}

impl<S> Clone for LayerState<S> {
    fn clone(&self) -> Self {
        match self {
            LayerState::NotReady => LayerState::NotReady,
            LayerState::Ready(layer) => LayerState::Ready(layer.clone()),
        }
    }
}

/// One renderable layer handed to the renderer.
///
/// Equality compares content: id, translation, pickability, and source
/// identity (`Arc::ptr_eq`). Adapters and callbacks are not compared.
pub struct LayerDescriptor<S> {
    /// `"{base}"` for single images, `"{base}-plate-{row}-{col}"` for wells
    pub id: String,
    /// Structured form of a well id
    pub cell: Option<CellId>,
    pub source: Arc<S>,
    /// Offset `[x, y]` in scene units
    pub translation: [f64; 2],
    pub pickable: bool,
    pub on_click: Option<Arc<dyn ClickHandler>>,
    /// Locator of the image this descriptor was built from
    pub locator: Option<String>,
    pub fetcher: TileFetchAdapter<S>,
}

impl<S> LayerDescriptor<S> {
    /// The event the renderer should report when this layer is picked.
    pub fn pick_event(&self) -> PickEvent {
        PickEvent::new(self.id.clone(), self.locator.clone())
    }

    /// Run this layer's click callback. Non-pickable layers ignore clicks.
    pub fn click(&self) -> Decoded {
        match (&self.on_click, self.pickable) {
            (Some(handler), true) => handler.on_click(&self.pick_event()),
            _ => Decoded::NotApplicable,
        }
    }
}

impl<S> Clone for LayerDescriptor<S> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            cell: self.cell.clone(),
            source: Arc::clone(&self.source),
            translation: self.translation,
            pickable: self.pickable,
            on_click: self.on_click.clone(),
            locator: self.locator.clone(),
            fetcher: self.fetcher.clone(),
        }
    }
}

impl<S> PartialEq for LayerDescriptor<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.translation == other.translation
            && self.pickable == other.pickable
            && Arc::ptr_eq(&self.source, &other.source)
    }
}

impl<S: PyramidSource> fmt::Debug for LayerDescriptor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerDescriptor")
            .field("id", &self.id)
            .field("source", &self.source.id())
            .field("translation", &self.translation)
            .field("pickable", &self.pickable)
            .field("locator", &self.locator)
            .finish()
    }
}
