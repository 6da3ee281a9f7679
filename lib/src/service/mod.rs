pub mod bedrock_service;
pub mod watson_service;
pub mod common_structs;

use std::str::FromStr;
use anyhow::{bail, Result};
use tracing::info;

use crate::{env_keys::CLASSIFIER_BACKEND, utilities::env_or_default};
use common_structs::EmotionScoreSet;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierBackend {
    Watson,
    Bedrock,
}

impl FromStr for ClassifierBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "watson" => Ok(Self::Watson),
            "bedrock" => Ok(Self::Bedrock),
            other => bail!("Unknown classifier backend: {}", other),
        }
    }
}

impl ClassifierBackend {
    pub fn from_env() -> Result<Self> {
        env_or_default(CLASSIFIER_BACKEND, "watson").parse()
    }
}


#[derive(Debug, Clone)]
pub enum EmotionClassifier {
    Watson(watson_service::WatsonService),
    Bedrock(bedrock_service::BedrockService),
}


#[derive(Debug, Clone)]
pub struct CommonService {
    pub classifier: EmotionClassifier,
}

impl CommonService {
    pub fn new(classifier: EmotionClassifier) -> Self {
        Self {
            classifier
        }
    }

    pub async fn from_env() -> Result<Self> {
        let backend = ClassifierBackend::from_env()?;
        info!("using {:?} classifier backend", backend);

        let classifier = match backend {
            ClassifierBackend::Watson => EmotionClassifier::Watson(watson_service::WatsonService::new()?),
            ClassifierBackend::Bedrock => {
                let config = aws_config::load_from_env().await;
                let bedrock_client = aws_sdk_bedrockruntime::Client::new(&config);
                EmotionClassifier::Bedrock(bedrock_service::BedrockService::new(&bedrock_client))
            },
        };

        Ok(Self::new(classifier))
    }

    pub async fn emotion_detector(&self, text: &str) -> Result<EmotionScoreSet> {
        match &self.classifier {
            EmotionClassifier::Watson(watson) => watson.get_emotion_scores(text).await,
            EmotionClassifier::Bedrock(bedrock) => bedrock.get_emotion_scores(text).await,
        }
    }
}
