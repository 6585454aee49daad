use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tokio_util::io::ReaderStream;

use crate::error::AppError;
use crate::utils::state::AppState;

/// GET /{*key}
///
/// The wildcard capture is the object key, used verbatim; no decoding and
/// no traversal sanitization beyond what the router already did.
pub async fn get_object_handler(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let object = state.storage.open_read(&key).await?;

    let stream = ReaderStream::new(object.reader);
    let body = Body::from_stream(stream);

    let mut builder = Response::builder().status(StatusCode::OK).header(
        header::CONTENT_TYPE,
        object
            .content_type
            .as_deref()
            .unwrap_or("application/octet-stream"),
    );
    if let Some(size) = object.size {
        builder = builder.header(header::CONTENT_LENGTH, size);
    }
    Ok(builder.body(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fixtures::{FixtureStore, fixture_state};

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn streams_exact_object_bytes() {
        let payload: Vec<u8> = (0..=255u8).cycle().take(70_000).collect();
        let state = fixture_state(FixtureStore {
            objects: vec![("blob.bin".to_string(), payload.clone())],
            ..Default::default()
        });

        let response = get_object_handler(State(state), Path("blob.bin".to_string()))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_LENGTH],
            payload.len().to_string().as_str()
        );
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/octet-stream"
        );
        assert_eq!(body_bytes(response).await, payload);
    }

    #[tokio::test]
    async fn key_with_slashes_is_passed_verbatim() {
        let state = fixture_state(FixtureStore {
            objects: vec![("foo/bar.txt".to_string(), b"hello".to_vec())],
            ..Default::default()
        });

        let response = get_object_handler(State(state), Path("foo/bar.txt".to_string()))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"hello");
    }

    #[tokio::test]
    async fn missing_key_returns_not_found() {
        let state = fixture_state(FixtureStore::default());

        let err = match get_object_handler(State(state), Path("nope.txt".to_string())).await {
            Ok(_) => panic!("expected error for missing key"),
            Err(err) => err,
        };
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(body.contains("nope.txt"));
    }

    #[tokio::test]
    async fn concurrent_downloads_do_not_interfere() {
        let state = fixture_state(FixtureStore {
            objects: vec![
                ("a.bin".to_string(), vec![1u8; 4096]),
                ("b.bin".to_string(), vec![2u8; 8192]),
            ],
            ..Default::default()
        });

        let (a, b) = tokio::join!(
            get_object_handler(State(state.clone()), Path("a.bin".to_string())),
            get_object_handler(State(state.clone()), Path("b.bin".to_string())),
        );

        assert_eq!(body_bytes(a.unwrap().into_response()).await, vec![1u8; 4096]);
        assert_eq!(body_bytes(b.unwrap().into_response()).await, vec![2u8; 8192]);
    }
}
