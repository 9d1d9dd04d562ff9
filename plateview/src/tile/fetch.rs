//! Async tile fetching over a pyramid source.

use std::fmt;
use std::sync::Arc;

use futures::future::join_all;

use super::{TileAddressTranslator, TileError, TileRequest, TileResult};
use crate::log::Logger;
use crate::pyramid::{PyramidGeometry, PyramidSource};
use crate::{log_debug, log_trace, log_warn};

/// Serves tiles for one pyramid source.
///
/// Stateless apart from the shared source handle: nothing is cached and
/// nothing is cancelled. Any number of `fetch` calls may be in flight at
/// once; each result belongs only to the request that produced it.
pub struct TileFetchAdapter<S> {
    source: Arc<S>,
    translator: TileAddressTranslator,
    logger: Arc<dyn Logger>,
}

impl<S: PyramidSource> TileFetchAdapter<S> {
    /// Create an adapter for a source.
    ///
    /// # Errors
    ///
    /// `UnsupportedGeometry` if the source advertises no levels, an empty
    /// shape, or non-square chunks.
    pub fn new(source: Arc<S>, logger: Arc<dyn Logger>) -> Result<Self, TileError> {
        let geometry = PyramidGeometry::of(source.as_ref())?;
        let translator = TileAddressTranslator::new(geometry)?;
        Ok(Self {
            source,
            translator,
            logger,
        })
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    pub fn translator(&self) -> &TileAddressTranslator {
        &self.translator
    }

    pub fn geometry(&self) -> &PyramidGeometry {
        self.translator.geometry()
    }

    /// Fetch one tile.
    ///
    /// Tiles outside the level extent, chunks the source reports as missing,
    /// and chunks whose bytes cannot form an image all come back as
    /// [`TileResult::Absent`]. Any other source fault becomes
    /// [`TileError::FetchFailed`].
    pub async fn fetch(&self, request: &TileRequest) -> Result<TileResult, TileError> {
        let chunk = match self.translator.translate(request) {
            Ok(chunk) => chunk,
            Err(TileError::OutOfRange { .. }) => {
                log_trace!(
                    self.logger,
                    "{} outside extent of '{}'",
                    request,
                    self.source.id()
                );
                return Ok(TileResult::Absent);
            }
            Err(e) => return Err(e),
        };

        match self
            .source
            .get_raw_chunk(chunk.level, chunk.row, chunk.col, 0)
            .await
        {
            Ok(raw) => {
                let result = TileResult::from(raw);
                if result.is_absent() {
                    log_debug!(
                        self.logger,
                        "Unusable chunk at {} of '{}', treating as absent",
                        chunk,
                        self.source.id()
                    );
                }
                Ok(result)
            }
            Err(e) if e.is_missing() => Ok(TileResult::Absent),
            Err(e) => {
                log_warn!(
                    self.logger,
                    "Chunk read failed at {} of '{}': {}",
                    chunk,
                    self.source.id(),
                    e
                );
                Err(TileError::FetchFailed {
                    source_id: self.source.id().to_string(),
                    chunk,
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Fetch several tiles concurrently, returning results in request order.
    pub async fn fetch_many(
        &self,
        requests: &[TileRequest],
    ) -> Vec<(TileRequest, Result<TileResult, TileError>)> {
        let results = join_all(requests.iter().map(|request| self.fetch(request))).await;
        requests.iter().copied().zip(results).collect()
    }

    /// Hand a tile fault reported by the renderer back to the source.
    pub fn report_tile_error(&self, error: &TileError) {
        self.source.on_tile_error(error);
    }
}

impl<S> Clone for TileFetchAdapter<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            translator: self.translator,
            logger: Arc::clone(&self.logger),
        }
    }
}

impl<S: PyramidSource> fmt::Debug for TileFetchAdapter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileFetchAdapter")
            .field("source", &self.source.id())
            .field("translator", &self.translator)
            .finish()
    }
}
