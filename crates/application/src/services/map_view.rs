//! Map view model produced by the route overlay renderer

use std::fmt;
use std::sync::Arc;

use domain::value_objects::{EntityId, GeoPoint};
use serde::{Deserialize, Serialize};

use crate::ports::NavigationPort;

/// Stroke style of a route polyline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylineStyle {
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub weight: u32,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
}

fn default_color() -> String {
    "RED".to_string()
}

const fn default_opacity() -> f32 {
    0.5
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            color: default_color(),
            weight: 0,
            opacity: default_opacity(),
        }
    }
}

impl PolylineStyle {
    /// Validate the style
    ///
    /// # Errors
    ///
    /// Returns an error if the color is empty or the opacity is outside [0, 1].
    pub fn validate(&self) -> Result<(), String> {
        if self.color.trim().is_empty() {
            return Err("color must not be empty".to_string());
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err("opacity must be between 0.0 and 1.0".to_string());
        }
        Ok(())
    }
}

/// What to do with route entries that could not be read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullVertexPolicy {
    /// Drop malformed entries and draw the remaining points
    #[default]
    Skip,
    /// Draw nothing for a route containing any malformed entry
    RejectRoute,
}

/// Interactive controls enabled on the map widget
#[allow(clippy::struct_excessive_bools)] // One flag per widget control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapOptions {
    #[serde(default = "default_true")]
    pub street_view_control: bool,
    #[serde(default = "default_true")]
    pub scale_control: bool,
    #[serde(default = "default_true")]
    pub scroll_wheel_zoom: bool,
    #[serde(default = "default_true")]
    pub pan_control: bool,
    #[serde(default = "default_true")]
    pub double_click_zoom: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            street_view_control: true,
            scale_control: true,
            scroll_wheel_zoom: true,
            pan_control: true,
            double_click_zoom: true,
        }
    }
}

/// Renderer settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Center used until a route provides one (`None` leaves the widget default)
    #[serde(default)]
    pub default_center: Option<GeoPoint>,
    #[serde(default)]
    pub style: PolylineStyle,
    #[serde(default)]
    pub null_vertex_policy: NullVertexPolicy,
    #[serde(default)]
    pub options: MapOptions,
}

impl RendererConfig {
    /// Validate the renderer settings
    ///
    /// # Errors
    ///
    /// Returns an error if the style or the default center is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.style.validate()?;
        if let Some(center) = self.default_center {
            GeoPoint::new(center.latitude(), center.longitude())
                .map_err(|e| format!("default_center: {e}"))?;
        }
        Ok(())
    }
}

/// Click handler bound to the entity a polyline was built from
#[derive(Clone)]
pub struct ClickHandler {
    target: EntityId,
    navigator: Arc<dyn NavigationPort>,
}

impl ClickHandler {
    pub(crate) fn new(target: EntityId, navigator: Arc<dyn NavigationPort>) -> Self {
        Self { target, navigator }
    }

    /// Entity navigated to on click
    pub const fn target(&self) -> &EntityId {
        &self.target
    }

    /// Request navigation to the captured entity
    pub fn on_click(&self) {
        self.navigator.show_entity(&self.target);
    }
}

impl fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickHandler")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// A route drawn as a polyline
#[derive(Debug, Clone, Serialize)]
pub struct PolylineOverlay {
    source: EntityId,
    vertices: Vec<GeoPoint>,
    style: PolylineStyle,
    #[serde(skip)]
    handler: ClickHandler,
}

impl PolylineOverlay {
    pub(crate) fn new(vertices: Vec<GeoPoint>, style: PolylineStyle, handler: ClickHandler) -> Self {
        Self {
            source: handler.target().clone(),
            vertices,
            style,
            handler,
        }
    }

    /// Entity this overlay was built from
    pub const fn source(&self) -> &EntityId {
        &self.source
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    pub const fn style(&self) -> &PolylineStyle {
        &self.style
    }

    /// Simulate a click on the polyline
    pub fn click(&self) {
        self.handler.on_click();
    }
}

/// How a render affected the map center
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "point", rename_all = "snake_case")]
pub enum CenterUpdate {
    /// A route provided a new center
    Moved(GeoPoint),
    /// No route provided a center; the previous one is kept
    Unchanged,
}

/// A fully built map: center, controls and route overlays
#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub(crate) center: Option<GeoPoint>,
    pub(crate) options: MapOptions,
    pub(crate) overlays: Vec<PolylineOverlay>,
}

impl MapView {
    /// Current center (`None` means the widget default)
    pub const fn center(&self) -> Option<GeoPoint> {
        self.center
    }

    pub const fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Overlays in entity iteration order
    pub fn overlays(&self) -> &[PolylineOverlay] {
        &self.overlays
    }

    /// Overlay built from `entity`, if it had a drawable route
    pub fn overlay_for(&self, entity: &EntityId) -> Option<&PolylineOverlay> {
        self.overlays.iter().find(|overlay| overlay.source() == entity)
    }
}

/// Outcome of a single render
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub view: Arc<MapView>,
    pub center: CenterUpdate,
}

impl RenderResult {
    pub fn overlays(&self) -> &[PolylineOverlay] {
        self.view.overlays()
    }
}

/// Lifecycle of a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    /// Nothing rendered yet
    Unbuilt,
    /// A map view is published
    Built,
}
