//! The counter inside the full app.

mod common;

use common::{TestCtx, users_json};
use kittest::Queryable;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn counter_increments_independently_of_users() {
    let mut ctx = TestCtx::new_app(ResponseTemplate::new(200).set_body_json(users_json(&[]))).await;
    let harness = ctx.harness_mut();

    assert!(harness.query_by_label("count is 0").is_some());

    harness.get_by_label("count is 0").click();
    harness.step();
    harness.step();

    assert!(harness.query_by_label("count is 1").is_some());
    assert!(harness.query_by_label("Load users").is_some());
    assert!(ctx.user_list().is_idle());
}
