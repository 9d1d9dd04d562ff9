//! The viewer session.

use std::sync::Arc;

use super::{LayerId, SessionError};
use crate::composite::{CompositeLayerBuilder, ImageLayer, LayerContent, LayerDescriptor, LayerState};
use crate::config::ViewerConfig;
use crate::interaction::{ClickHandler, Decoded, InteractionDecoder, NavigationRequest, PickEvent};
use crate::log::Logger;
use crate::{log_debug, log_info};
use crate::pyramid::PyramidSource;
use crate::view::{ViewState, ViewStateInitializer, ViewStateStore};

/// An image to show, as handed over by a loader.
#[derive(Debug)]
pub struct ImageConfig<S> {
    /// Display name; generated when absent
    pub name: Option<String>,
    /// Where the image was loaded from
    pub locator: Option<String>,
    pub content: LayerContent<S>,
}

impl<S> ImageConfig<S> {
    /// A single multiscale image.
    pub fn single(source: Arc<S>) -> Self {
        Self {
            name: None,
            locator: None,
            content: LayerContent::Single(source),
        }
    }

    /// A plate of wells, sources in row-major order.
    pub fn plate(rows: u32, columns: u32, sources: Vec<Arc<S>>) -> Self {
        Self {
            name: None,
            locator: None,
            content: LayerContent::Plate {
                rows,
                columns,
                sources,
            },
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.locator = Some(locator.into());
        self
    }
}

/// What to draw: the composed layers and the view they are seen through.
#[derive(Debug)]
pub struct Frame<S: PyramidSource> {
    pub layers: Vec<LayerDescriptor<S>>,
    /// `None` until a view state was set or computed
    pub view_state: Option<ViewState>,
}

struct Slot<S> {
    id: LayerId,
    name: String,
    visible: bool,
    state: LayerState<S>,
}

impl<S> Slot<S> {
    fn make_ready(&mut self, image: ImageConfig<S>, logger: &dyn Logger) {
        if let Some(name) = image.name {
            self.name = name;
        }
        self.state = LayerState::Ready(ImageLayer {
            id: self.id.to_string(),
            locator: image.locator,
            content: image.content,
            visible: self.visible,
        });
        log_info!(logger, "Layer {} ready ({})", self.id, self.name);
    }
}

/// State of one viewer.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use plateview::config::ViewerConfig;
/// use plateview::log::NoOpLogger;
/// use plateview::pyramid::{InMemoryPyramid, Shape};
/// use plateview::session::{ImageConfig, ViewerSession};
///
/// let mut session = ViewerSession::new(&ViewerConfig::default(), Arc::new(NoOpLogger));
/// let source = Arc::new(InMemoryPyramid::gradient("img", 3, Shape::new(512, 256), Shape::new(128, 128)).unwrap());
/// session.add_image(ImageConfig::single(source));
///
/// let frame = session.render().unwrap();
/// assert_eq!(frame.layers.len(), 1);
/// assert_eq!(frame.view_state.unwrap().zoom, -2.0);
/// ```
pub struct ViewerSession<S> {
    slots: Vec<Slot<S>>,
    view: ViewStateStore,
    builder: CompositeLayerBuilder,
    decoder: Arc<InteractionDecoder>,
    origin: String,
    logger: Arc<dyn Logger>,
}

impl<S: PyramidSource> ViewerSession<S> {
    pub fn new(config: &ViewerConfig, logger: Arc<dyn Logger>) -> Self {
        let decoder = Arc::new(
            InteractionDecoder::new(Arc::clone(&logger))
                .with_field_path(config.interaction.field_path.clone()),
        );
        let handler: Arc<dyn ClickHandler> = decoder.clone();
        let builder = CompositeLayerBuilder::new(Arc::clone(&logger))
            .with_spacer(config.layout.spacer)
            .with_click_handler(handler);
        Self {
            slots: Vec::new(),
            view: ViewStateStore::new(),
            builder,
            decoder,
            origin: config.interaction.origin.clone(),
            logger,
        }
    }

    /// Reserve a layer for an image that is still loading.
    pub fn add_pending(&mut self, name: Option<String>) -> LayerId {
        let id = LayerId::auto();
        let name = name.unwrap_or_else(|| format!("image_{}", self.slots.len()));
        log_debug!(self.logger, "Layer {} pending ({})", id, name);
        self.slots.push(Slot {
            id: id.clone(),
            name,
            visible: true,
            state: LayerState::NotReady,
        });
        id
    }

    /// Make a reserved layer ready. Attaching to a ready layer replaces it.
    pub fn attach(&mut self, id: &LayerId, image: ImageConfig<S>) -> Result<(), SessionError> {
        let logger = Arc::clone(&self.logger);
        self.slot_mut(id)?.make_ready(image, logger.as_ref());
        Ok(())
    }

    /// Add a ready image in one step.
    pub fn add_image(&mut self, image: ImageConfig<S>) -> LayerId {
        let id = self.add_pending(image.name.clone());
        if let Some(slot) = self.slots.last_mut() {
            slot.make_ready(image, self.logger.as_ref());
        }
        id
    }

    /// Show or hide a layer. Hidden layers keep their place in the order.
    pub fn set_visible(&mut self, id: &LayerId, visible: bool) -> Result<(), SessionError> {
        let slot = self.slot_mut(id)?;
        slot.visible = visible;
        if let Some(layer) = slot.state.layer_mut() {
            layer.visible = visible;
        }
        Ok(())
    }

    /// Set an explicit view state. The initializer never runs afterwards.
    pub fn set_view_state(&mut self, view: ViewState) {
        self.view.set(view);
    }

    pub fn view_state(&self) -> Option<ViewState> {
        self.view.current()
    }

    /// Remove every layer. The view state is kept.
    pub fn clear_view(&mut self) {
        log_debug!(self.logger, "Clearing {} layers", self.slots.len());
        self.slots.clear();
    }

    pub fn layer_ids(&self) -> Vec<LayerId> {
        self.slots.iter().map(|slot| slot.id.clone()).collect()
    }

    pub fn layer_name(&self, id: &LayerId) -> Option<&str> {
        self.slots
            .iter()
            .find(|slot| &slot.id == id)
            .map(|slot| slot.name.as_str())
    }

    pub fn is_ready(&self, id: &LayerId) -> bool {
        self.slots
            .iter()
            .any(|slot| &slot.id == id && slot.state.is_ready())
    }

    /// Compose the current layers and initialize the view if needed.
    ///
    /// # Errors
    ///
    /// Fails as a whole when any layer cannot be composed; the view state
    /// is not touched in that case.
    pub fn render(&mut self) -> Result<Frame<S>, SessionError> {
        let states: Vec<LayerState<S>> = self.slots.iter().map(|slot| slot.state.clone()).collect();
        let layers = self.builder.build(&states)?;
        if let Some(view) = ViewStateInitializer::run(&mut self.view, &layers) {
            log_info!(
                self.logger,
                "Initial view: zoom {}, target {:?}",
                view.zoom,
                view.target
            );
        }
        Ok(Frame {
            layers,
            view_state: self.view.current(),
        })
    }

    /// Decode a click on a rendered layer.
    pub fn handle_click(&self, event: &PickEvent) -> Decoded {
        self.decoder.decode(event)
    }

    /// Viewer URL that opens a navigation target.
    pub fn navigation_url(&self, request: &NavigationRequest) -> String {
        request.viewer_url(&self.origin)
    }

    fn slot_mut(&mut self, id: &LayerId) -> Result<&mut Slot<S>, SessionError> {
        self.slots
            .iter_mut()
            .find(|slot| &slot.id == id)
            .ok_or_else(|| SessionError::UnknownLayer(id.clone()))
    }
}
