//! Application services

pub mod location_service;
pub mod map_view;
pub mod route_overlay_renderer;

pub use location_service::{DEFAULT_LOOKUP_TIMEOUT, LocationService};
pub use map_view::{
    CenterUpdate, ClickHandler, MapOptions, MapView, NullVertexPolicy, PolylineOverlay,
    PolylineStyle, RenderResult, RendererConfig, RendererState,
};
pub use route_overlay_renderer::RouteOverlayRenderer;
