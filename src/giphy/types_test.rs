use super::*;

fn make_item(id: &str, small: &str, full: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "gif",
        "id": id,
        "title": format!("gif {id}"),
        "images": {
            "fixed_height_small": { "url": small, "width": "100" },
            "fixed_height": { "url": full, "width": "200" }
        }
    })
}

#[test]
fn parse_flattens_renditions() {
    let json = serde_json::json!({
        "data": [make_item("a1", "https://media.giphy.com/a1/100.gif", "https://media.giphy.com/a1/200.gif")],
        "pagination": { "count": 1 }
    })
    .to_string();

    let items = parse_response(&json).unwrap();
    assert_eq!(
        items,
        vec![MediaItem {
            id: "a1".into(),
            title: "gif a1".into(),
            preview_url: "https://media.giphy.com/a1/100.gif".into(),
            full_url: "https://media.giphy.com/a1/200.gif".into(),
        }]
    );
}

#[test]
fn parse_keeps_upstream_order() {
    let json = serde_json::json!({
        "data": [make_item("x", "s1", "f1"), make_item("y", "s2", "f2"), make_item("z", "s3", "f3")]
    })
    .to_string();

    let ids: Vec<_> = parse_response(&json).unwrap().into_iter().map(|m| m.id).collect();
    assert_eq!(ids, ["x", "y", "z"]);
}

#[test]
fn parse_missing_data_is_empty() {
    assert!(parse_response(r#"{"meta":{"status":200}}"#).unwrap().is_empty());
    assert!(parse_response(r#"{"data":null}"#).unwrap().is_empty());
    assert!(parse_response(r#"{"data":{"id":"single"}}"#).unwrap().is_empty());
}

#[test]
fn parse_skips_items_without_renditions() {
    let json = serde_json::json!({
        "data": [
            { "id": "no-images", "title": "bare" },
            { "id": "half", "images": { "fixed_height": { "url": "f" } } },
            make_item("ok", "s", "f")
        ]
    })
    .to_string();

    let items = parse_response(&json).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "ok");
}

#[test]
fn parse_defaults_missing_title() {
    let json = serde_json::json!({
        "data": [{ "id": "t", "images": { "fixed_height_small": { "url": "s" }, "fixed_height": { "url": "f" } } }]
    })
    .to_string();

    assert_eq!(parse_response(&json).unwrap()[0].title, "");
}

#[test]
fn parse_rejects_non_json() {
    assert!(matches!(parse_response("<html>502</html>"), Err(GiphyError::ApiParse(_))));
}
