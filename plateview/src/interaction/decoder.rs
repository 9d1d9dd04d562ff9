//! Decoding well clicks into navigation requests.

use std::sync::Arc;

use crate::config::DEFAULT_FIELD_PATH;
use crate::layout::GRID_MARKER;
use crate::log::Logger;
use crate::log_debug;

/// Row labels of a plate, one letter per row.
pub const ROW_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A click reported by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickEvent {
    /// Identifier of the picked layer
    pub layer_id: String,
    /// Locator of the picked layer's source, if it has one
    pub source_locator: Option<String>,
}

impl PickEvent {
    pub fn new(layer_id: impl Into<String>, source_locator: Option<String>) -> Self {
        Self {
            layer_id: layer_id.into(),
            source_locator,
        }
    }
}

/// Request to open one well's image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub row: u32,
    pub col: u32,
    /// `"{source}/0/{row letter}/{col + 1}/{field}/"`
    pub locator: String,
}

impl NavigationRequest {
    /// Letter of the row (`A` for row 0).
    pub fn row_label(&self) -> char {
        ROW_LETTERS
            .chars()
            .nth(self.row as usize)
            .unwrap_or('?')
    }

    /// 1-based column number.
    pub fn column_number(&self) -> u32 {
        self.col + 1
    }

    /// Viewer URL that loads the well image, `"{origin}?source={locator}"`.
    pub fn viewer_url(&self, origin: &str) -> String {
        format!("{}?source={}", origin, self.locator)
    }
}

/// Outcome of decoding a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Not a well click, or one that cannot be resolved
    NotApplicable,
    /// Navigate to a well image
    Navigate(NavigationRequest),
}

impl Decoded {
    pub fn navigation(&self) -> Option<&NavigationRequest> {
        match self {
            Decoded::Navigate(request) => Some(request),
            Decoded::NotApplicable => None,
        }
    }
}

/// Callback attached to pickable layers.
pub trait ClickHandler: Send + Sync {
    fn on_click(&self, event: &PickEvent) -> Decoded;
}

/// Parses well layer ids and builds navigation requests.
///
/// # Example
///
/// ```
/// use plateview::interaction::{Decoded, InteractionDecoder, PickEvent};
/// use plateview::log::NoOpLogger;
/// use std::sync::Arc;
///
/// let decoder = InteractionDecoder::new(Arc::new(NoOpLogger));
/// let event = PickEvent::new("img1-plate-2-3", Some("s3://bucket/plate.zarr".to_string()));
///
/// let request = decoder.decode(&event).navigation().cloned().unwrap();
/// assert_eq!(request.locator, "s3://bucket/plate.zarr/0/C/4/Field_1/");
///
/// assert_eq!(decoder.decode(&PickEvent::new("img1", None)), Decoded::NotApplicable);
/// ```
pub struct InteractionDecoder {
    field_path: String,
    logger: Arc<dyn Logger>,
}

impl InteractionDecoder {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            field_path: DEFAULT_FIELD_PATH.to_string(),
            logger,
        }
    }

    /// Override the trailing field segment of generated locators.
    pub fn with_field_path(mut self, field_path: impl Into<String>) -> Self {
        self.field_path = field_path.into();
        self
    }

    pub fn field_path(&self) -> &str {
        &self.field_path
    }

    /// Row and column encoded in a layer id, if it is a well id.
    ///
    /// The two integers after the last grid marker are used; anything after
    /// them is ignored. The marker must start the id or follow a `-`.
    pub fn parse_cell(layer_id: &str) -> Option<(u32, u32)> {
        let marker = format!("{}-", GRID_MARKER);
        let (head, tail) = layer_id.rsplit_once(marker.as_str())?;
        if !(head.is_empty() || head.ends_with('-')) {
            return None;
        }
        let mut parts = tail.split('-');
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        Some((row, col))
    }

    /// Decode a click.
    pub fn decode(&self, event: &PickEvent) -> Decoded {
        let Some((row, col)) = Self::parse_cell(&event.layer_id) else {
            log_debug!(self.logger, "Ignoring click on '{}'", event.layer_id);
            return Decoded::NotApplicable;
        };
        let Some(source) = event.source_locator.as_deref() else {
            log_debug!(
                self.logger,
                "Ignoring click on '{}': layer has no source locator",
                event.layer_id
            );
            return Decoded::NotApplicable;
        };
        let Some(letter) = ROW_LETTERS.chars().nth(row as usize) else {
            log_debug!(
                self.logger,
                "Ignoring click on '{}': row {} has no letter",
                event.layer_id,
                row
            );
            return Decoded::NotApplicable;
        };

        let locator = format!(
            "{}/0/{}/{}/{}/",
            source.trim_end_matches('/'),
            letter,
            col + 1,
            self.field_path
        );
        log_debug!(self.logger, "Well ({}, {}) -> {}", row, col, locator);
        Decoded::Navigate(NavigationRequest { row, col, locator })
    }
}

impl ClickHandler for InteractionDecoder {
    fn on_click(&self, event: &PickEvent) -> Decoded {
        self.decode(event)
    }
}
