
use std::convert::Infallible;
use axum::async_trait;
use axum::extract::{FromRequest, Multipart, Query, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use emotion_detection::detector::{detect_emotion, select_text};
use emotion_detection::service::CommonService;
use lambda_http::tracing;

const INDEX_HTML: &str = include_str!("../templates/index.html");
pub const TEXT_TO_ANALYZE: &str = "textToAnalyze";


// repeated keys keep the first occurrence
fn first_value(pairs: Vec<(String, String)>, key: &str) -> Option<String> {
    pairs
        .into_iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value)
}


/// `textToAnalyze` from a urlencoded or multipart body. On GET the urlencoded
/// form is read from the query string.
#[derive(Debug, Clone, Default)]
pub struct FormText(pub Option<String>);

#[async_trait]
impl<S> FromRequest<S> for FormText
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req.headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if !is_multipart {
            let text = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .ok()
                .and_then(|Form(pairs)| first_value(pairs, TEXT_TO_ANALYZE));
            return Ok(Self(text));
        }

        let mut multipart = match Multipart::from_request(req, state).await {
            Ok(multipart) => multipart,
            Err(error) => {
                tracing::warn!("Error reading multipart body: {}", error);
                return Ok(Self(None));
            },
        };

        while let Ok(Some(field)) = multipart.next_field().await {
            // uploaded files are not form values
            if field.name() != Some(TEXT_TO_ANALYZE) || field.file_name().is_some() {
                continue;
            }
            return Ok(Self(field.text().await.ok()));
        }
        Ok(Self(None))
    }
}


fn build_error_response() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}


pub async fn emotion_detector(
    State(service): State<CommonService>,
    query: Option<Query<Vec<(String, String)>>>,
    FormText(form_text): FormText,
) -> Response {
    let query_text = query.and_then(|Query(pairs)| first_value(pairs, TEXT_TO_ANALYZE));
    let text = select_text(query_text, form_text);

    match detect_emotion(&service, text.as_deref()).await {
        Ok(body) => body.into_response(),
        Err(error) => {
            tracing::error!("Error detecting emotion: {:?}", error);
            build_error_response()
        },
    }
}


pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
