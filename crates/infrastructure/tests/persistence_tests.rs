//! Integration tests for the in-memory collection driving the renderer

use std::sync::Arc;

use application::{CenterUpdate, RendererConfig, RendererState, RouteOverlayRenderer};
use domain::{GeoPoint, ToDoItem};
use infrastructure::{InMemoryToDoItems, LinkNavigator, parse_fixtures};

const FIXTURES: &str = r#"{
    "items": [
        {
            "id": "11111111-1111-4111-8111-111111111111",
            "description": "Stay at home",
            "owned_by": "sven"
        },
        {
            "id": "22222222-2222-4222-8222-222222222222",
            "description": "Walk to Westminster",
            "owned_by": "sven",
            "points": ["-0.1276;51.5034", "-0.1246;51.4995"]
        },
        {
            "id": "33333333-3333-4333-8333-333333333333",
            "description": "Cycle in Berlin",
            "owned_by": "sven",
            "points": ["13.405;52.52", "13.41;52.53"]
        },
        {
            "id": "44444444-4444-4444-8444-444444444444",
            "description": "Broken route",
            "owned_by": "dick",
            "points": ["nonsense", "also nonsense"]
        }
    ]
}"#;

struct Fixture {
    items: Arc<InMemoryToDoItems>,
    navigator: Arc<LinkNavigator>,
    renderer: RouteOverlayRenderer,
}

fn fixture() -> Fixture {
    let items = Arc::new(InMemoryToDoItems::from_items(parse_fixtures(FIXTURES).unwrap()));
    let navigator = Arc::new(LinkNavigator::new("http://localhost:8080"));
    let renderer = RouteOverlayRenderer::new(
        items.clone(),
        navigator.clone(),
        RendererConfig::default(),
    );
    Fixture {
        items,
        navigator,
        renderer,
    }
}

#[test]
fn renders_drawable_routes_in_collection_order() {
    let fixture = fixture();
    assert_eq!(fixture.renderer.state(), RendererState::Unbuilt);

    let result = fixture.renderer.rerender();

    assert_eq!(fixture.renderer.state(), RendererState::Built);
    assert_eq!(result.overlays().len(), 2);
    assert_eq!(
        result.center,
        CenterUpdate::Moved(GeoPoint::new(51.5034, -0.1276).unwrap())
    );
    assert_eq!(result.overlays()[0].style().color, "RED");
}

#[test]
fn clicking_each_overlay_links_to_its_item() {
    let fixture = fixture();
    fixture.renderer.rerender();

    for index in 0..2 {
        let target = fixture.renderer.click(index).unwrap();
        assert_eq!(
            fixture.navigator.last_link(),
            Some(format!("http://localhost:8080/entity/{target}"))
        );
    }
    assert_eq!(
        fixture.navigator.history(),
        vec![
            "http://localhost:8080/entity/TODO:22222222-2222-4222-8222-222222222222".to_string(),
            "http://localhost:8080/entity/TODO:33333333-3333-4333-8333-333333333333".to_string(),
        ]
    );
}

#[test]
fn change_notification_triggers_rebuild() {
    let fixture = fixture();
    let changes = fixture.items.subscribe();
    fixture.renderer.rerender();
    let center = fixture.renderer.view().unwrap().center();

    let new_id = fixture.items.insert(
        ToDoItem::new("Fly home", "sven")
            .unwrap()
            .with_route(&[GeoPoint::berlin(), GeoPoint::london()]),
    );
    assert!(changes.has_changed().unwrap());

    let result = fixture.renderer.on_collection_changed();
    assert_eq!(result.overlays().len(), 3);
    assert!(fixture.renderer.overlay_for(&new_id).is_some());
    assert_eq!(result.view.center(), center);
}

#[test]
fn emptied_collection_keeps_center() {
    let fixture = fixture();
    let first = fixture.renderer.rerender();

    fixture.items.replace(Vec::new());
    let second = fixture.renderer.rerender();

    assert!(second.overlays().is_empty());
    assert_eq!(second.center, CenterUpdate::Unchanged);
    assert_eq!(second.view.center(), first.view.center());
}
