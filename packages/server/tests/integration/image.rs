use std::sync::Arc;

use serde_json::json;
use server::store::MemoryBlessingStore;

use crate::common::{MAX_UPLOAD_SIZE, RejectingGateway, TestApp, routes, test_config};

mod upload_image {
    use super::*;

    #[tokio::test]
    async fn stores_under_event_folder_with_filename_stem() {
        let app = TestApp::spawn().await;

        let res = app
            .upload(&routes::upload_to("ceremony"), "photo1.jpg", b"JPEG".to_vec())
            .await;

        assert_eq!(res.status, 200, "Upload failed: {}", res.text);
        assert_eq!(res.body["folder"], "wedding/private/ceremony");
        assert_eq!(res.body["public_id"], "wedding/private/ceremony/photo1");
        assert_eq!(res.body["original_filename"], "photo1.jpg");
        assert_eq!(res.body["content_type"], "image/jpeg");
        assert_eq!(res.body["size"], 4);
        assert_eq!(
            res.body["url"],
            "https://media.test/wedding/private/ceremony/photo1"
        );
        assert!(res.body["metadata"].is_object());
    }

    #[tokio::test]
    async fn uploaded_image_is_listed_for_its_event() {
        let app = TestApp::spawn().await;

        let uploaded = app
            .upload(&routes::upload_to("ceremony"), "photo1.jpg", b"JPEG".to_vec())
            .await;
        let res = app.get(&routes::images("ceremony")).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["images"], json!([uploaded.body["url"]]));
    }

    #[tokio::test]
    async fn missing_event_uses_uncategorized_folder() {
        let app = TestApp::spawn().await;

        let res = app.upload(routes::UPLOAD, "photo.png", b"PNG".to_vec()).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["folder"], "wedding/private/Uncategorized");

        let blank = app
            .upload(&routes::upload_to(""), "other.png", b"PNG".to_vec())
            .await;
        assert_eq!(blank.body["folder"], "wedding/private/Uncategorized");

        let listed = app.get(&routes::images("Uncategorized")).await;
        assert_eq!(listed.body["images"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_file_field_is_rejected_without_remote_call() {
        let app = TestApp::spawn().await;

        let form = reqwest::multipart::Form::new().text("caption", "no picture here");
        let res = app.post_form(&routes::upload_to("ceremony"), form).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body, json!({ "error": "No file uploaded" }));
        assert_eq!(app.remote_calls(), 0);
    }

    #[tokio::test]
    async fn text_field_named_file_is_not_an_upload() {
        let app = TestApp::spawn().await;

        let form = reqwest::multipart::Form::new().text("file", "not a file");
        let res = app.post_form(&routes::upload_to("ceremony"), form).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body, json!({ "error": "No file uploaded" }));
        assert_eq!(app.remote_calls(), 0);
    }

    #[tokio::test]
    async fn request_without_body_is_rejected_as_json() {
        let app = TestApp::spawn().await;

        let res = app.post_empty(&routes::upload_to("ceremony")).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body, json!({ "error": "No file uploaded" }));
        assert_eq!(app.remote_calls(), 0);
    }

    #[tokio::test]
    async fn json_body_is_rejected_as_no_file() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(&routes::upload_to("ceremony"), &json!({ "file": "photo1.jpg" }))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body, json!({ "error": "No file uploaded" }));
        assert_eq!(app.remote_calls(), 0);
    }

    #[tokio::test]
    async fn empty_file_is_rejected_without_remote_call() {
        let app = TestApp::spawn().await;

        let res = app
            .upload(&routes::upload_to("ceremony"), "empty.jpg", Vec::new())
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "No file uploaded");
        assert_eq!(app.remote_calls(), 0);
    }

    #[tokio::test]
    async fn oversized_file_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .upload(
                &routes::upload_to("ceremony"),
                "huge.jpg",
                vec![0u8; MAX_UPLOAD_SIZE as usize + 1],
            )
            .await;

        assert_eq!(res.status, 400);
        assert!(res.body["error"].as_str().is_some());
        assert_eq!(app.remote_calls(), 0);
    }

    #[tokio::test]
    async fn gateway_failure_returns_generic_500() {
        let app = TestApp::spawn_with(
            Arc::new(MemoryBlessingStore::new()),
            Arc::new(RejectingGateway),
            test_config(vec![]),
        )
        .await;

        let res = app
            .upload(&routes::upload_to("ceremony"), "photo1.jpg", b"JPEG".to_vec())
            .await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body, json!({ "error": "Failed to upload image" }));
        assert!(!res.text.contains("Invalid Signature"));
    }
}

mod list_images {
    use super::*;

    #[tokio::test]
    async fn unknown_event_lists_nothing() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::images("nobody")).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!({ "images": [] }));
    }

    #[tokio::test]
    async fn lists_newest_first_and_scoped_to_event() {
        let app = TestApp::spawn().await;
        app.upload(&routes::upload_to("ceremony"), "a.jpg", b"A".to_vec())
            .await;
        app.upload(&routes::upload_to("reception"), "b.jpg", b"B".to_vec())
            .await;
        app.upload(&routes::upload_to("ceremony"), "c.jpg", b"C".to_vec())
            .await;

        let res = app.get(&routes::images("ceremony")).await;

        assert_eq!(
            res.body["images"],
            json!([
                "https://media.test/wedding/private/ceremony/c",
                "https://media.test/wedding/private/ceremony/a",
            ])
        );
    }

    #[tokio::test]
    async fn listing_is_capped_at_thirty() {
        let app = TestApp::spawn().await;
        for i in 0..32 {
            let res = app
                .upload(&routes::upload_to("party"), &format!("img{i}.jpg"), b"X".to_vec())
                .await;
            assert_eq!(res.status, 200);
        }

        let res = app.get(&routes::images("party")).await;

        let images = res.body["images"].as_array().unwrap();
        assert_eq!(images.len(), 30);
        assert_eq!(images[0], "https://media.test/wedding/private/party/img31");
    }

    #[tokio::test]
    async fn gateway_failure_returns_generic_500() {
        let app = TestApp::spawn_with(
            Arc::new(MemoryBlessingStore::new()),
            Arc::new(RejectingGateway),
            test_config(vec![]),
        )
        .await;

        let res = app.get(&routes::images("ceremony")).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body, json!({ "error": "Failed to fetch images" }));
    }
}
