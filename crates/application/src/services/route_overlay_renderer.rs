//! Route overlay renderer
//!
//! Turns a collection of route sources into a map view: an initial center
//! and one clickable polyline per drawable route.
//!
//! Every render builds a complete new [`MapView`] and publishes it with a
//! single atomic swap, so readers see either the previous overlay set or the
//! new one. There is no incremental diffing.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use domain::RouteSource;
use domain::value_objects::{EntityId, GeoPoint, Route};
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{EntityCollectionPort, NavigationPort};
use crate::services::map_view::{
    CenterUpdate, ClickHandler, MapView, NullVertexPolicy, PolylineOverlay, RenderResult,
    RendererConfig, RendererState,
};

/// Renders route sources as polylines on a map
pub struct RouteOverlayRenderer {
    collection: Arc<dyn EntityCollectionPort>,
    navigator: Arc<dyn NavigationPort>,
    config: RendererConfig,
    view: ArcSwapOption<MapView>,
    /// Serializes rebuilds so each one starts from the last published center
    rebuild: Mutex<()>,
}

impl std::fmt::Debug for RouteOverlayRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteOverlayRenderer")
            .field("config", &self.config)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl RouteOverlayRenderer {
    /// Create an unbuilt renderer
    #[must_use]
    pub fn new(
        collection: Arc<dyn EntityCollectionPort>,
        navigator: Arc<dyn NavigationPort>,
        config: RendererConfig,
    ) -> Self {
        Self {
            collection,
            navigator,
            config,
            view: ArcSwapOption::empty(),
            rebuild: Mutex::new(()),
        }
    }

    pub const fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn state(&self) -> RendererState {
        if self.view.load().is_some() {
            RendererState::Built
        } else {
            RendererState::Unbuilt
        }
    }

    /// The currently published map view
    pub fn view(&self) -> Option<Arc<MapView>> {
        self.view.load_full()
    }

    /// Build a map view from `entities` and publish it
    ///
    /// The first entity, in order, whose route starts with a valid point
    /// provides the center; otherwise the previous center is kept. Each
    /// entity with at least one drawable vertex gets a polyline whose click
    /// handler navigates to that entity. A bad route never affects the
    /// other entities.
    #[instrument(skip_all, fields(entities = entities.len()))]
    pub fn render(&self, entities: &[Arc<dyn RouteSource>]) -> RenderResult {
        let _guard = self.rebuild.lock();

        let routes: Vec<(EntityId, Route)> = entities
            .iter()
            .map(|entity| (entity.entity_id(), entity.route()))
            .collect();

        let center = routes
            .iter()
            .find_map(|(_, route)| route.first())
            .map_or(CenterUpdate::Unchanged, CenterUpdate::Moved);

        let previous_center = self
            .view
            .load_full()
            .map_or(self.config.default_center, |view| view.center);

        let overlays: Vec<PolylineOverlay> = routes
            .into_iter()
            .filter_map(|(id, route)| self.build_overlay(id, &route))
            .collect();

        let view = Arc::new(MapView {
            center: match center {
                CenterUpdate::Moved(point) => Some(point),
                CenterUpdate::Unchanged => previous_center,
            },
            options: self.config.options,
            overlays,
        });

        self.view.store(Some(Arc::clone(&view)));

        info!(
            overlays = view.overlays.len(),
            center = ?view.center,
            "Rendered route overlays"
        );

        RenderResult { view, center }
    }

    /// Rebuild from a fresh snapshot of the entity collection
    pub fn rerender(&self) -> RenderResult {
        let snapshot = self.collection.snapshot();
        self.render(&snapshot)
    }

    /// Handle a collection-changed notification from the host
    pub fn on_collection_changed(&self) -> RenderResult {
        debug!("Entity collection changed, rebuilding map");
        self.rerender()
    }

    /// Click the overlay at `index` of the current view
    ///
    /// Returns the entity navigated to.
    pub fn click(&self, index: usize) -> Result<EntityId, ApplicationError> {
        let view = self.view().ok_or(ApplicationError::NotRendered)?;
        let overlay = view
            .overlays()
            .get(index)
            .ok_or_else(|| domain::DomainError::not_found("Overlay", index.to_string()))?;

        overlay.click();
        Ok(overlay.source().clone())
    }

    /// Overlay built from `entity` in the current view
    pub fn overlay_for(&self, entity: &EntityId) -> Option<PolylineOverlay> {
        self.view()?.overlay_for(entity).cloned()
    }

    fn build_overlay(&self, id: EntityId, route: &Route) -> Option<PolylineOverlay> {
        let vertices = self.vertices(&id, route)?;
        if vertices.is_empty() {
            debug!(entity = %id, "No drawable route points, skipping entity");
            return None;
        }

        let handler = ClickHandler::new(id, Arc::clone(&self.navigator));
        Some(PolylineOverlay::new(
            vertices,
            self.config.style.clone(),
            handler,
        ))
    }

    fn vertices(&self, id: &EntityId, route: &Route) -> Option<Vec<GeoPoint>> {
        let malformed = route.malformed_count();
        if malformed == 0 {
            return Some(route.points().collect());
        }

        match self.config.null_vertex_policy {
            NullVertexPolicy::Skip => {
                warn!(entity = %id, malformed, "Skipping malformed route points");
                Some(route.points().collect())
            },
            NullVertexPolicy::RejectRoute => {
                warn!(entity = %id, malformed, "Rejecting route with malformed points");
                None
            },
        }
    }
}
