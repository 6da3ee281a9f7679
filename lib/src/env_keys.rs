pub static CLASSIFIER_BACKEND: &str = "CLASSIFIER_BACKEND";
pub static CLASSIFIER_TIMEOUT_SECS: &str = "CLASSIFIER_TIMEOUT_SECS";

pub static WATSON_EMOTION_URL: &str = "WATSON_EMOTION_URL";
pub static WATSON_MODEL_ID: &str = "WATSON_MODEL_ID";

pub static CHAT_MODEL: &str = "CHAT_MODEL";

pub static HOST: &str = "HOST";
pub static PORT: &str = "PORT";
pub static LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";
