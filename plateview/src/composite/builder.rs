//! Building descriptors from layer states.

use std::sync::Arc;

use super::{CompositeError, ImageLayer, LayerContent, LayerDescriptor, LayerState};
use crate::config::DEFAULT_SPACER;
use crate::interaction::ClickHandler;
use crate::layout::{GridLayoutPlanner, GridSpec};
use crate::log::Logger;
use crate::pyramid::PyramidSource;
use crate::tile::TileFetchAdapter;
use crate::{log_debug, log_warn};

/// Produces the renderer's layer list.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use plateview::composite::{CompositeLayerBuilder, ImageLayer, LayerContent, LayerState};
/// use plateview::log::NoOpLogger;
/// use plateview::pyramid::{InMemoryPyramid, Shape};
///
/// let well = |n: usize| {
///     Arc::new(InMemoryPyramid::gradient(format!("well-{}", n), 1, Shape::new(16, 16), Shape::new(16, 16)).unwrap())
/// };
/// let plate = ImageLayer::new(
///     "layer-1",
///     LayerContent::Plate { rows: 2, columns: 2, sources: (0..4).map(well).collect() },
/// );
///
/// let builder = CompositeLayerBuilder::new(Arc::new(NoOpLogger));
/// let descriptors = builder.build(&[LayerState::NotReady, LayerState::Ready(plate)]).unwrap();
///
/// assert_eq!(descriptors.len(), 4);
/// assert_eq!(descriptors[3].id, "layer-1-plate-1-1");
/// ```
pub struct CompositeLayerBuilder {
    spacer: f64,
    click_handler: Option<Arc<dyn ClickHandler>>,
    logger: Arc<dyn Logger>,
}

impl CompositeLayerBuilder {
    /// A builder with the default well spacer and no click handler.
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            spacer: DEFAULT_SPACER,
            click_handler: None,
            logger,
        }
    }

    /// Gap between neighbouring wells, in scene units.
    pub fn with_spacer(mut self, spacer: f64) -> Self {
        self.spacer = spacer;
        self
    }

    /// Callback attached to every well descriptor.
    pub fn with_click_handler(mut self, handler: Arc<dyn ClickHandler>) -> Self {
        self.click_handler = Some(handler);
        self
    }

    pub fn spacer(&self) -> f64 {
        self.spacer
    }

    /// Build descriptors for every ready, visible layer, in input order.
    ///
    /// # Errors
    ///
    /// The first layer that cannot be composed aborts the build; nothing
    /// is returned for the layers that did succeed.
    pub fn build<S: PyramidSource>(
        &self,
        layers: &[LayerState<S>],
    ) -> Result<Vec<LayerDescriptor<S>>, CompositeError> {
        let mut descriptors = Vec::new();
        for state in layers {
            let LayerState::Ready(layer) = state else {
                continue;
            };
            if !layer.visible {
                continue;
            }
            match self.build_layer(layer) {
                Ok(built) => descriptors.extend(built),
                Err(e) => {
                    log_warn!(self.logger, "Composition failed: {}", e);
                    return Err(e);
                }
            }
        }
        log_debug!(
            self.logger,
            "Composed {} descriptors from {} layers",
            descriptors.len(),
            layers.len()
        );
        Ok(descriptors)
    }

    fn build_layer<S: PyramidSource>(
        &self,
        layer: &ImageLayer<S>,
    ) -> Result<Vec<LayerDescriptor<S>>, CompositeError> {
        match &layer.content {
            LayerContent::Single(source) => {
                let fetcher = self.fetcher(&layer.id, source)?;
                Ok(vec![LayerDescriptor {
                    id: layer.id.clone(),
                    cell: None,
                    source: Arc::clone(source),
                    translation: [0.0, 0.0],
                    pickable: false,
                    on_click: None,
                    locator: layer.locator.clone(),
                    fetcher,
                }])
            }
            LayerContent::Plate {
                rows,
                columns,
                sources,
            } => {
                let first = sources.first().ok_or_else(|| CompositeError::EmptyPlate {
                    layer_id: layer.id.clone(),
                })?;
                let layout_error = |source| CompositeError::Layout {
                    layer_id: layer.id.clone(),
                    source,
                };
                let spec = GridSpec::new(*rows, *columns, first.base_shape(), self.spacer)
                    .map_err(layout_error)?;
                let cells = GridLayoutPlanner::new(spec)
                    .plan(sources)
                    .map_err(layout_error)?;

                cells
                    .into_iter()
                    .map(|cell| -> Result<LayerDescriptor<S>, CompositeError> {
                        let fetcher = self.fetcher(&layer.id, &cell.source)?;
                        let id = cell.id(&layer.id);
                        Ok(LayerDescriptor {
                            id: id.to_string(),
                            cell: Some(id),
                            source: cell.source,
                            translation: cell.offset,
                            pickable: true,
                            on_click: self.click_handler.clone(),
                            locator: layer.locator.clone(),
                            fetcher,
                        })
                    })
                    .collect()
            }
        }
    }

    fn fetcher<S: PyramidSource>(
        &self,
        layer_id: &str,
        source: &Arc<S>,
    ) -> Result<TileFetchAdapter<S>, CompositeError> {
        TileFetchAdapter::new(Arc::clone(source), Arc::clone(&self.logger)).map_err(|source| {
            CompositeError::Tile {
                layer_id: layer_id.to_string(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{InteractionDecoder, PickEvent};
    use crate::layout::LayoutError;
    use crate::log::NoOpLogger;
    use crate::pyramid::{InMemoryPyramid, Shape};
    use crate::tile::TileError;

    fn source(id: &str) -> Arc<InMemoryPyramid> {
        Arc::new(InMemoryPyramid::gradient(
            id,
            2,
            Shape::new(100, 200),
            Shape::new(64, 64),
        )
        .unwrap())
    }

    fn wells(n: usize) -> Vec<Arc<InMemoryPyramid>> {
        (0..n).map(|i| source(&format!("well-{}", i))).collect()
    }

    fn builder() -> CompositeLayerBuilder {
        CompositeLayerBuilder::new(Arc::new(NoOpLogger))
    }

    fn plate(id: &str, rows: u32, columns: u32, sources: Vec<Arc<InMemoryPyramid>>) -> LayerState<InMemoryPyramid> {
        LayerState::Ready(
            ImageLayer::new(
                id,
                LayerContent::Plate {
                    rows,
                    columns,
                    sources,
                },
            )
            .with_locator("https://example.org/plate.zarr"),
        )
    }

    #[test]
    fn test_single_image_descriptor() {
        let image = source("img");
        let layers = vec![LayerState::Ready(ImageLayer::new(
            "layer-1",
            LayerContent::Single(Arc::clone(&image)),
        ))];

        let descriptors = builder().build(&layers).unwrap();

        assert_eq!(descriptors.len(), 1);
        let d = &descriptors[0];
        assert_eq!(d.id, "layer-1");
        assert_eq!(d.translation, [0.0, 0.0]);
        assert!(!d.pickable);
        assert!(d.on_click.is_none());
        assert!(Arc::ptr_eq(&d.source, &image));
    }

    #[test]
    fn test_not_ready_and_hidden_layers_are_skipped() {
        let hidden = ImageLayer::new("layer-2", LayerContent::Single(source("b"))).with_visible(false);
        let layers = vec![
            LayerState::NotReady,
            LayerState::Ready(hidden),
            LayerState::Ready(ImageLayer::new("layer-3", LayerContent::Single(source("c")))),
        ];

        let descriptors = builder().build(&layers).unwrap();
        let ids: Vec<&str> = descriptors.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["layer-3"]);
    }

    #[test]
    fn test_plate_descriptors() {
        let decoder: Arc<dyn ClickHandler> = Arc::new(InteractionDecoder::new(Arc::new(NoOpLogger)));
        let builder = builder().with_click_handler(decoder);
        let descriptors = builder.build(&[plate("layer-1", 2, 3, wells(6))]).unwrap();

        assert_eq!(descriptors.len(), 6);
        assert_eq!(descriptors[5].id, "layer-1-plate-1-2");
        assert!(descriptors.iter().all(|d| d.pickable && d.on_click.is_some()));
        // cell 100×200, spacer 5: left = -(3 × 205) / 2, top = -(2 × 105) / 2
        assert_eq!(descriptors[0].translation, [-307.5, -105.0]);
        assert_eq!(descriptors[4].translation, [-102.5, 0.0]);
        assert_eq!(descriptors[4].cell.as_ref().map(|c| (c.row, c.col)), Some((1, 1)));
    }

    #[test]
    fn test_well_click_navigates() {
        let decoder: Arc<dyn ClickHandler> = Arc::new(InteractionDecoder::new(Arc::new(NoOpLogger)));
        let descriptors = builder()
            .with_click_handler(decoder)
            .build(&[plate("layer-1", 2, 3, wells(6))])
            .unwrap();

        assert_eq!(
            descriptors[5].pick_event(),
            PickEvent::new(
                "layer-1-plate-1-2",
                Some("https://example.org/plate.zarr".to_string())
            )
        );
        let request = descriptors[5].click().navigation().cloned().unwrap();
        assert_eq!(request.locator, "https://example.org/plate.zarr/0/B/3/Field_1/");
    }

    #[test]
    fn test_custom_spacer() {
        let descriptors = builder()
            .with_spacer(0.0)
            .build(&[plate("p", 1, 2, wells(2))])
            .unwrap();
        assert_eq!(descriptors[0].translation, [-200.0, -50.0]);
        assert_eq!(descriptors[1].translation, [0.0, -50.0]);
    }

    #[test]
    fn test_mismatch_produces_nothing() {
        let layers = vec![
            LayerState::Ready(ImageLayer::new("layer-0", LayerContent::Single(source("a")))),
            plate("layer-1", 2, 3, wells(9)),
        ];

        let err = builder().build(&layers).unwrap_err();
        assert_eq!(
            err,
            CompositeError::Layout {
                layer_id: "layer-1".to_string(),
                source: LayoutError::LayoutMismatch {
                    expected: 6,
                    actual: 9
                },
            }
        );
    }

    #[test]
    fn test_unsupported_geometry_fails_build() {
        let odd = Arc::new(InMemoryPyramid::gradient(
            "odd",
            1,
            Shape::new(32, 32),
            Shape::new(16, 8),
        )
        .unwrap());
        let layers = vec![LayerState::Ready(ImageLayer::new("layer-9", LayerContent::Single(odd)))];

        match builder().build(&layers) {
            Err(CompositeError::Tile {
                layer_id,
                source: TileError::UnsupportedGeometry(_),
            }) => assert_eq!(layer_id, "layer-9"),
            other => panic!("expected unsupported geometry, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_plate() {
        let err = builder().build(&[plate("layer-1", 1, 1, Vec::new())]).unwrap_err();
        assert_eq!(
            err,
            CompositeError::EmptyPlate {
                layer_id: "layer-1".to_string()
            }
        );
    }

    #[test]
    fn test_builds_are_content_equal() {
        let layers = vec![
            LayerState::Ready(ImageLayer::new("layer-0", LayerContent::Single(source("a")))),
            plate("layer-1", 2, 2, wells(4)),
        ];
        let builder = builder();
        assert_eq!(builder.build(&layers).unwrap(), builder.build(&layers).unwrap());
    }

    #[test]
    fn test_each_well_gets_its_own_fetcher() {
        let sources = wells(4);
        let descriptors = builder().build(&[plate("p", 2, 2, sources.clone())]).unwrap();
        for (descriptor, source) in descriptors.iter().zip(&sources) {
            assert!(Arc::ptr_eq(descriptor.fetcher.source(), source));
        }
    }
}
