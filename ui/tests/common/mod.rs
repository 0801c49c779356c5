use std::time::Duration;

use egui_kittest::Harness;
use roster_business::UserListCompute;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    _mock_server: Option<MockServer>,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, RosterApp> {
        &self.harness
    }

    /// App backed by a mock server answering `GET /users` with `response`.
    pub async fn new_app(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let app = RosterApp::new(State::test(&mock_server.uri()));
        Self {
            _mock_server: Some(mock_server),
            harness: Harness::new_eframe(|_| app),
        }
    }

    /// App pointed at `base_url` without any server behind it.
    #[allow(unused)]
    pub fn new_app_without_server(base_url: &str) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let app = RosterApp::new(State::test(base_url));
        Self {
            _mock_server: None,
            harness: Harness::new_eframe(|_| app),
        }
    }

    pub fn user_list(&self) -> &UserListCompute {
        self.harness
            .state()
            .state()
            .ctx
            .cached::<UserListCompute>()
            .expect("UserListCompute is registered")
    }

    /// Steps frames until the in-flight request resolves (or gives up after ~5s).
    pub async fn wait_for_response(&mut self) {
        for _ in 0..250 {
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.harness.step();
            if !self.user_list().is_loading() {
                break;
            }
        }
        self.harness.step();
    }
}

#[allow(unused)]
pub fn users_json(names: &[&str]) -> serde_json::Value {
    let users: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            serde_json::json!({
                "id": i + 1,
                "name": name,
                "username": format!("user{}", i + 1),
                "email": format!("user{}@example.com", i + 1),
                "phone": "1-770-736-8031 x56442",
                "website": format!("site{}.org", i + 1),
            })
        })
        .collect();
    serde_json::Value::Array(users)
}
