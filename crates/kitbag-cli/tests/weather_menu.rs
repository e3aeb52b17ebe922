//! Drive the weather menu with scripted input against a mock OpenWeather.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Cursor;
use std::time::Duration;

use kitbag_cli::{weather_menu, Console, WeatherSession};
use kitbag_weather::{Units, WeatherClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WEATHER_PATH: &str = "/data/2.5/weather";

fn payload(name: &str, temp: f64) -> serde_json::Value {
    serde_json::json!({
        "weather": [{"main": "Clear", "description": "clear sky"}],
        "main": {"temp": temp, "feels_like": temp - 1.0, "humidity": 40},
        "wind": {"speed": 2.5, "deg": 90, "gust": 4.0},
        "name": name,
        "cod": 200
    })
}

async fn mount_city(server: &MockServer, city: &str, temp: f64) {
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("q", city))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload(city, temp)))
        .mount(server)
        .await;
}

async fn run_script(server: &MockServer, session: &mut WeatherSession, script: &str) -> String {
    let client = WeatherClient::with_base_url(
        "test-key",
        &format!("{}{}", server.uri(), WEATHER_PATH),
        Duration::from_secs(5),
    )
    .unwrap();
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    weather_menu::run(&mut console, &client, session).await.unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

#[tokio::test]
async fn test_search_city() {
    let server = MockServer::start().await;
    mount_city(&server, "Madrid", 24.5).await;
    let mut session = WeatherSession::new(Units::Metric, 3);

    let output = run_script(&server, &mut session, "1\nMadrid\n0\n").await;

    assert!(output.contains("(Current units: metric)"));
    assert!(output.contains("Weather for Madrid:"));
    assert!(output.contains("  Temperature : 24.5 °C (feels like 23.5 °C)"));
    assert!(output.contains("  Wind        : 2.5 m/s, 90° (gusts up to 4 m/s)"));
    assert!(output.trim_end().ends_with("Goodbye."));
}

#[tokio::test]
async fn test_search_blank_city() {
    let server = MockServer::start().await;
    let mut session = WeatherSession::new(Units::Metric, 3);

    let output = run_script(&server, &mut session, "1\n\n0\n").await;

    assert!(output.contains("No city entered."));
}

#[tokio::test]
async fn test_search_unknown_city_keeps_menu_running() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&server)
        .await;
    let mut session = WeatherSession::new(Units::Metric, 3);

    let output = run_script(&server, &mut session, "1\nNowhere\n5\n0\n").await;

    assert!(output.contains("API error for city 'Nowhere': city not found"));
    assert!(output.contains("Check the spelling of the city name and try again."));
    assert!(output.contains("No favourite cities yet."));
}

#[tokio::test]
async fn test_toggle_units_changes_request_and_labels() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("units", "imperial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload("Boston", 70.0)))
        .expect(1)
        .mount(&server)
        .await;
    let mut session = WeatherSession::new(Units::Metric, 3);

    let output = run_script(&server, &mut session, "6\n1\nBoston\n0\n").await;

    assert!(output.contains("Units set to imperial (Fahrenheit, mph)."));
    assert!(output.contains("(Current units: imperial)"));
    assert!(output.contains("  Temperature : 70 °F (feels like 69 °F)"));
    assert_eq!(session.units, Units::Imperial);
}

#[tokio::test]
async fn test_favourites_add_list_and_remove() {
    let server = MockServer::start().await;
    mount_city(&server, "Oslo", -3.0).await;
    mount_city(&server, "Lima", 19.0).await;
    let mut session = WeatherSession::new(Units::Metric, 3);

    let script = "2\nOslo\n2\nLima\n2\nOslo\n3\n4\n1\n5\n0\n";
    let output = run_script(&server, &mut session, script).await;

    assert!(output.contains("Added 'Oslo' to favourites."));
    assert!(output.contains("Added 'Lima' to favourites."));
    assert!(output.contains("'Oslo' is already in favourites."));
    assert!(output.contains("Favourite cities with current weather:"));
    assert!(output.contains("Weather for Oslo:"));
    assert!(output.contains("Weather for Lima:"));
    assert!(output.contains("Removed 'Oslo' from favourites."));
    assert_eq!(session.favourites.iter().collect::<Vec<_>>(), vec!["Lima"]);
}

#[tokio::test]
async fn test_list_with_weather_continues_after_failure() {
    let server = MockServer::start().await;
    mount_city(&server, "Rome", 28.0).await;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("q", "Gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&server)
        .await;
    let mut session = WeatherSession::new(Units::Metric, 3);
    session.favourites.add("Gone").unwrap();
    session.favourites.add("Rome").unwrap();

    let output = run_script(&server, &mut session, "3\n0\n").await;

    assert!(output.contains("API error for city 'Gone': city not found"));
    assert!(output.contains("Weather for Rome:"));
}

#[tokio::test]
async fn test_add_when_full_prompts_for_removal() {
    let server = MockServer::start().await;
    let mut session = WeatherSession::new(Units::Metric, 3);
    for city in ["London", "Paris", "Tokyo"] {
        session.favourites.add(city).unwrap();
    }

    let output = run_script(&server, &mut session, "2\nRome\n2\n0\n").await;

    assert!(output.contains("You already have 3 favourite cities:"));
    assert!(output.contains("To add a new one, remove an existing favourite first."));
    assert!(output.contains("Removed 'Paris' from favourites."));
    assert!(output.contains("Added 'Rome' to favourites."));
    assert_eq!(
        session.favourites.iter().collect::<Vec<_>>(),
        vec!["London", "Tokyo", "Rome"]
    );
}

#[tokio::test]
async fn test_add_when_full_and_removal_cancelled() {
    let server = MockServer::start().await;
    let mut session = WeatherSession::new(Units::Metric, 1);
    session.favourites.add("London").unwrap();

    let output = run_script(&server, &mut session, "2\nRome\n\n0\n").await;

    assert!(output.contains("No changes made."));
    assert!(output.contains("Favourites list is still full. Cannot add a new city right now."));
    assert_eq!(session.favourites.iter().collect::<Vec<_>>(), vec!["London"]);
}

#[tokio::test]
async fn test_remove_bad_choices() {
    let server = MockServer::start().await;
    let mut session = WeatherSession::new(Units::Metric, 3);

    let output = run_script(&server, &mut session, "4\n0\n").await;
    assert!(output.contains("No favourite cities to update."));

    session.favourites.add("Cairo").unwrap();
    let output = run_script(&server, &mut session, "4\nx\n4\n5\n4\n0\n0\n").await;

    assert!(output.contains("Invalid choice."));
    assert_eq!(output.matches("Choice out of range.").count(), 2);
    assert_eq!(session.favourites.len(), 1);
}

#[tokio::test]
async fn test_remove_oversized_choice_is_out_of_range() {
    let server = MockServer::start().await;
    let mut session = WeatherSession::new(Units::Metric, 3);
    session.favourites.add("Cairo").unwrap();

    let output = run_script(&server, &mut session, "4\n99999999999999999999\n0\n").await;

    assert!(!output.contains("Invalid choice."));
    assert!(output.contains("Choice out of range."));
    assert_eq!(session.favourites.len(), 1);
}

#[tokio::test]
async fn test_server_error_has_no_spelling_hint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let mut session = WeatherSession::new(Units::Metric, 3);

    let output = run_script(&server, &mut session, "1\nLondon\n0\n").await;

    assert!(output.contains("Error calling OpenWeather API:"));
    assert!(!output.contains("Check the spelling"));
}
