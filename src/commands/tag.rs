//! Tag Commands
//!
//! Bindings for `/tag/` endpoints.

use serde_json::to_value;

use crate::client::{ApiClient, CallOptions, Method, Transport};
use crate::error::Result;
use crate::models::{NewTag, Tag, TagPatch};

fn tag_path<T: Transport>(api: &ApiClient<T>, id: u32) -> String {
    api.endpoint(&format!("/tag/{}", id))
}

pub async fn list_tags<T: Transport>(api: &ApiClient<T>) -> Result<Vec<Tag>> {
    api.call_as(&api.endpoint("/tag/"), CallOptions::default()).await
}

pub async fn get_tag<T: Transport>(api: &ApiClient<T>, id: u32) -> Result<Tag> {
    api.call_as(&tag_path(api, id), CallOptions::default()).await
}

pub async fn create_tag<T: Transport>(api: &ApiClient<T>, tag: &NewTag) -> Result<Tag> {
    let body = to_value(tag)?;
    api.call_as(&api.endpoint("/tag/"), CallOptions::new(Method::Post).json(body))
        .await
}

pub async fn update_tag<T: Transport>(api: &ApiClient<T>, id: u32, patch: &TagPatch) -> Result<Tag> {
    let body = to_value(patch)?;
    api.call_as(&tag_path(api, id), CallOptions::new(Method::Put).json(body))
        .await
}

pub async fn delete_tag<T: Transport>(api: &ApiClient<T>, id: u32) -> Result<()> {
    api.call(&tag_path(api, id), CallOptions::new(Method::Delete)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{client, MockTransport};
    use crate::commands::tests::tag_json;
    use crate::error::Error;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_list_tags() {
        let transport = MockTransport::default();
        transport.reply(200, json!([tag_json(1, "home"), tag_json(2, "work")]));

        let tags = list_tags(&client(&transport)).await.unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[1].name, "work");
        assert_eq!(transport.last_request().url, "/v1/tag/");
    }

    #[tokio::test]
    async fn test_create_tag_sends_body() {
        let transport = MockTransport::default();
        transport.reply(201, tag_json(5, "errands"));

        let new_tag = NewTag { name: "errands".into(), color: "#667eea".into() };
        let tag = create_tag(&client(&transport), &new_tag).await.unwrap();

        assert_eq!(tag.id, 5);
        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"name": "errands", "color": "#667eea"}));
    }

    #[tokio::test]
    async fn test_update_and_delete_paths() {
        let transport = MockTransport::default();
        transport.reply(200, tag_json(3, "renamed"));
        transport.reply_raw(crate::client::HttpResponse { status: 204, ..Default::default() });
        let api = client(&transport);

        let patch = TagPatch { name: Some("renamed".into()), ..Default::default() };
        update_tag(&api, 3, &patch).await.unwrap();
        assert_eq!(transport.last_request().url, "/v1/tag/3");
        assert_eq!(transport.last_request().method, Method::Put);

        delete_tag(&api, 3).await.unwrap();
        assert_eq!(transport.last_request().method, Method::Delete);
    }

    #[tokio::test]
    async fn test_missing_tag_is_api_error() {
        let transport = MockTransport::default();
        transport.reply(404, json!({"error": {"code": "NOT_FOUND", "message": "タグが見つかりません。", "details": []}}));

        let err = get_tag(&client(&transport), 42).await.unwrap_err();
        match err {
            Error::Api(api) => {
                assert_eq!(api.status, 404);
                assert_eq!(api.message, "タグが見つかりません。");
            }
            other => panic!("expected api error, got {:?}", other),
        }
    }
}
