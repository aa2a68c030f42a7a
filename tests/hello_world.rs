use hello_world_tdd::{
    app::spawn_app,
    core::greeting::greeting_model::Greeting,
    display::{greeting_client::GreetingClient, greeting_display::GreetingDisplay},
};

#[tokio::test]
async fn display_renders_greeting_from_service() {
    let url = spawn_app().await.unwrap();
    let mut display = GreetingDisplay::new(GreetingClient::new(url));

    assert!(display.state().is_loading());
    assert!(!display.render().contains("Hello"));

    display.mount().await.unwrap();

    assert!(display.render().contains("Hello Unicorn"));
}

#[tokio::test]
async fn service_returns_unicorn_json() {
    let url = spawn_app().await.unwrap();
    let response = reqwest::get(format!("{url}/helloworld")).await.unwrap();
    assert_eq!(200, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(serde_json::json!({ "name": "Unicorn" }), body);
}

#[tokio::test]
async fn displays_share_one_service() {
    let url = spawn_app().await.unwrap();
    let client = GreetingClient::new(url);
    let mut first = GreetingDisplay::new(client.clone());
    let mut second = GreetingDisplay::new(client);
    first.mount().await.unwrap();
    second.mount().await.unwrap();
    assert_eq!(Some(&Greeting::new("Unicorn")), first.state().greeting());
    assert_eq!(first.state(), second.state());
}
