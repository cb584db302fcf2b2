//! Command implementations
//!
//! Wires the configured adapters to the application services.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, anyhow};
use application::{LocationService, RouteOverlayRenderer};
use domain::{EntityId, GeoPoint, Locatable, TODO_OBJECT_TYPE, ToDoItem};
use infrastructure::{AppConfig, GeocodingAdapter, InMemoryToDoItems, LinkNavigator};
use tracing::info;

/// Application wiring for a single CLI invocation
#[derive(Debug)]
pub struct App {
    config: AppConfig,
    items: Arc<InMemoryToDoItems>,
    navigator: Arc<LinkNavigator>,
    renderer: RouteOverlayRenderer,
}

impl App {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let items = Arc::new(InMemoryToDoItems::new());
        let navigator = Arc::new(LinkNavigator::new(config.navigation.base_url.clone()));
        let renderer =
            RouteOverlayRenderer::new(items.clone(), navigator.clone(), config.map.clone());
        Self {
            config,
            items,
            navigator,
            renderer,
        }
    }

    /// Replace the collection with the items of a fixture file
    pub fn load_fixtures(&self, path: &Path) -> anyhow::Result<usize> {
        let items = infrastructure::load_fixtures(path)?;
        let count = items.len();
        self.items.replace(items);
        info!(count, path = %path.display(), "Fixtures loaded");
        Ok(count)
    }

    /// Render the collection and describe the result as JSON
    pub fn render(&self) -> serde_json::Value {
        let result = self.renderer.rerender();
        serde_json::json!({
            "center_update": result.center,
            "view": &*result.view,
        })
    }

    /// Render, click overlay `index` and return the navigation link
    pub fn click(&self, index: usize) -> anyhow::Result<String> {
        self.renderer.rerender();
        let target = self.renderer.click(index)?;
        self.navigator
            .last_link()
            .ok_or_else(|| anyhow!("no navigation recorded for {target}"))
    }

    fn location_service(&self) -> anyhow::Result<LocationService> {
        let adapter = GeocodingAdapter::new(&self.config.geocoding)?;
        Ok(LocationService::new(Arc::new(adapter))
            .with_timeout(self.config.location.lookup_timeout()))
    }

    /// Resolve an address
    pub async fn geocode(&self, address: &str) -> anyhow::Result<Option<GeoPoint>> {
        Ok(self.location_service()?.lookup(address).await)
    }

    /// Geocode `address` and store it as the location of item `id`
    pub async fn update_location(&self, id: &str, address: &str) -> anyhow::Result<ToDoItem> {
        let id = parse_item_id(id)?;
        let mut item = self
            .items
            .get(&id)
            .ok_or_else(|| anyhow!("no to-do item {id}"))?;

        self.location_service()?
            .update_location(&mut item, address)
            .await;

        let updated = self.items.update(&id, |stored| {
            stored.set_location(item.location());
            Ok(stored.clone())
        })?;
        Ok(updated)
    }
}

/// Accept `TODO:<uuid>` or a bare uuid
fn parse_item_id(id: &str) -> anyhow::Result<EntityId> {
    let qualified = if id.contains(':') {
        id.to_string()
    } else {
        format!("{TODO_OBJECT_TYPE}:{id}")
    };
    EntityId::parse(&qualified).with_context(|| format!("invalid item id {id:?}"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const FIXTURES: &str = r#"{
        "items": [
            {
                "id": "22222222-2222-4222-8222-222222222222",
                "description": "Walk to Westminster",
                "owned_by": "sven",
                "points": ["-0.1276;51.5034", "-0.1246;51.4995"]
            },
            { "description": "Stay at home", "owned_by": "sven" }
        ]
    }"#;

    fn app_with_fixtures() -> App {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(FIXTURES.as_bytes()).unwrap();

        let app = App::new(AppConfig::default());
        assert_eq!(app.load_fixtures(file.path()).unwrap(), 2);
        app
    }

    #[test]
    fn render_describes_view() {
        let app = app_with_fixtures();
        let json = app.render();

        assert_eq!(json["center_update"]["kind"], "moved");
        assert_eq!(json["view"]["overlays"].as_array().unwrap().len(), 1);
        assert_eq!(json["view"]["overlays"][0]["style"]["color"], "RED");
    }

    #[test]
    fn click_returns_link() {
        let app = app_with_fixtures();
        assert_eq!(
            app.click(0).unwrap(),
            "http://localhost:8080/entity/TODO:22222222-2222-4222-8222-222222222222"
        );
        assert!(app.click(1).is_err());
    }

    #[test]
    fn item_id_forms() {
        let bare = parse_item_id("22222222-2222-4222-8222-222222222222").unwrap();
        let qualified = parse_item_id("TODO:22222222-2222-4222-8222-222222222222").unwrap();
        assert_eq!(bare, qualified);
        assert!(parse_item_id("not-a-uuid").is_err());
    }

    #[tokio::test]
    async fn update_location_of_unknown_item_fails() {
        let app = app_with_fixtures();
        let err = app
            .update_location("33333333-3333-4333-8333-333333333333", "Berlin")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no to-do item"));
    }

    #[test]
    fn missing_fixture_file_fails() {
        let app = App::new(AppConfig::default());
        assert!(app.load_fixtures(Path::new("/nonexistent/fixtures.json")).is_err());
    }
}
