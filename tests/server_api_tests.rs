use teamcomp::composition::{Command, CompositionStore};
use teamcomp::data::parse_catalog;
use teamcomp::server::routes::route_request;

fn loaded_store() -> CompositionStore {
    let catalog = parse_catalog(include_str!("fixtures/catalog.json"), "TFTSet14")
        .expect("fixture catalog should parse");
    let store = CompositionStore::new();
    store.dispatch(Command::LoadCatalog(catalog));
    store
}

fn json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).expect("response should be valid json")
}

#[test]
fn health_endpoint_returns_ok_json() {
    let response = route_request(&CompositionStore::new(), "GET", "/api/health", "");
    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_type, "application/json");
    assert!(response.body.contains("\"status\": \"ok\""));
}

#[test]
fn catalog_endpoint_reports_loading_before_load() {
    let response = route_request(&CompositionStore::new(), "GET", "/api/catalog", "");
    assert_eq!(response.status_code, 200);

    let payload = json(&response.body);
    assert_eq!(payload["status"]["phase"], "loading");
    assert_eq!(payload["champion_count"], 0);
}

#[test]
fn catalog_endpoint_lists_loaded_entities() {
    let response = route_request(&loaded_store(), "GET", "/api/catalog?fresh=1", "");
    assert_eq!(response.status_code, 200);

    let payload = json(&response.body);
    assert_eq!(payload["status"]["phase"], "ready");
    assert_eq!(payload["champion_count"], 4);
    assert_eq!(payload["augment_count"], 2);
    assert_eq!(payload["champions"][0]["apiName"], "TFT14_Poppy");
}

#[test]
fn step_endpoint_applies_json_and_yaml_steps() {
    let store = loaded_store();

    let response = route_request(
        &store,
        "POST",
        "/api/composition/steps",
        r#"{"op":"place","champion":"TFT14_Zac","row":0,"col":0}"#,
    );
    assert_eq!(response.status_code, 200);
    let payload = json(&response.body);
    assert_eq!(payload["economy"]["gold"], 4);
    assert_eq!(payload["economy"]["level"], 3);

    let response = route_request(
        &store,
        "POST",
        "/api/composition/steps",
        "op: star\nrow: 0\ncol: 0\nlevel: 2\n",
    );
    assert_eq!(response.status_code, 200);
    assert_eq!(json(&response.body)["economy"]["gold"], 12);

    let composition = json(&route_request(&store, "GET", "/api/composition", "").body);
    assert_eq!(composition["board"][0]["champion"]["apiName"], "TFT14_Zac");
    assert_eq!(composition["board"][0]["star_level"], 2);
    assert_eq!(composition["trait_counts"]["Bruiser"], 1);
}

#[test]
fn step_endpoint_rejects_unknown_names() {
    let store = loaded_store();
    let response = route_request(
        &store,
        "POST",
        "/api/composition/steps",
        r#"{"op":"place","champion":"TFT14_Nobody","row":0,"col":0}"#,
    );
    assert_eq!(response.status_code, 400);
    assert!(response.body.contains("TFT14_Nobody"));
    assert!(store.snapshot().board().is_empty());
}

#[test]
fn step_endpoint_rejects_malformed_bodies() {
    let response = route_request(&loaded_store(), "POST", "/api/composition/steps", "{not json");
    assert_eq!(response.status_code, 400);
    assert!(json(&response.body)["status"] == "error");
}

#[test]
fn simulation_request_endpoint_mirrors_the_board() {
    let store = loaded_store();
    route_request(
        &store,
        "POST",
        "/api/composition/steps",
        r#"{"op":"place","champion":"TFT14_Jinx","row":3,"col":2}"#,
    );
    route_request(
        &store,
        "POST",
        "/api/composition/steps",
        r#"{"op":"attach","item":"TFT_Item_RecurveBow","row":3,"col":2}"#,
    );

    let response = route_request(&store, "GET", "/api/simulation/request", "");
    assert_eq!(response.status_code, 200);
    let payload = json(&response.body);
    let unit = &payload["boardChampions"][0];
    assert_eq!(unit["apiName"], "TFT14_Jinx");
    assert_eq!(unit["stars"], 1);
    assert_eq!(unit["items"][0]["apiName"], "TFT_Item_RecurveBow");
    assert_eq!(unit["position"]["row"], 3);
    assert_eq!(unit["position"]["col"], 2);
}

#[test]
fn unknown_route_returns_not_found() {
    let response = route_request(&CompositionStore::new(), "DELETE", "/api/composition", "");
    assert_eq!(response.status_code, 404);
    assert!(response.to_http_string().starts_with("HTTP/1.1 404 Not Found"));
}
