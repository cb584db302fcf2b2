//! Adapters implementing application ports

mod geocoding_adapter;
mod link_navigator;

pub use geocoding_adapter::GeocodingAdapter;
pub use link_navigator::LinkNavigator;
