
use anyhow::{bail, Result};
use reqwest::{header::{HeaderMap, HeaderValue, CONTENT_TYPE}, Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::{env_keys::{WATSON_EMOTION_URL, WATSON_MODEL_ID}, utilities::{classifier_timeout, env_or_default}};
use super::common_structs::{EmotionScoreSet, EmotionScores};

pub const DEFAULT_EMOTION_PREDICT_ENDPOINT: &str = "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";
pub const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";
const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

#[derive(Debug, Clone)]
pub struct WatsonService {
    client: Client,
    endpoint: String,
    headers: HeaderMap
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionPredictResponse {
    #[serde(default)]
    pub emotion_predictions: Vec<EmotionPrediction>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmotionPrediction {
    pub emotion: EmotionScores,
}


impl WatsonService {
    pub fn new() -> Result<Self> {
        let endpoint = env_or_default(WATSON_EMOTION_URL, DEFAULT_EMOTION_PREDICT_ENDPOINT);
        let model_id = env_or_default(WATSON_MODEL_ID, DEFAULT_MODEL_ID);
        let client = Client::builder()
            .timeout(classifier_timeout()?)
            .build()?;
        Self::with_client(client, &endpoint, &model_id)
    }

    pub fn with_client(client: Client, endpoint: &str, model_id: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(MODEL_ID_HEADER, HeaderValue::from_str(model_id)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            client,
            endpoint: endpoint.to_owned(),
            headers
        })
    }

    pub async fn get_emotion_scores(&self, text: &str) -> Result<EmotionScoreSet> {
        let body = json!({
            "raw_document": {
                "text": text
            }
        });

        let response = self.client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .body(serde_json::to_string(&body)?)
            .send()
            .await?;

        let status = response.status();
        // the service answers 400 for text it cannot process
        if status == StatusCode::BAD_REQUEST {
            warn!("classifier rejected text with status {}", status);
            return Ok(EmotionScoreSet::rejected());
        }
        if !status.is_success() {
            bail!("Emotion predict failed with status {}", status);
        }

        let body_string = response.text().await?;
        debug!("response_body: {}", body_string);
        let predict_response = serde_json::from_str::<EmotionPredictResponse>(&body_string)?;
        Ok(Self::process_predict_response(predict_response))
    }

    fn process_predict_response(response: EmotionPredictResponse) -> EmotionScoreSet {
        match response.emotion_predictions.into_iter().next() {
            Some(prediction) => EmotionScoreSet::classified(prediction.emotion),
            None => {
                warn!("classifier returned no emotion predictions");
                EmotionScoreSet::rejected()
            },
        }
    }
}
