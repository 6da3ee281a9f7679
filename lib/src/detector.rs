//! Turns a piece of submitted text into the sentence shown to the user.

use anyhow::Result;
use tracing::{debug, info};

use crate::service::{common_structs::EmotionScoreSet, CommonService};

pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";


/// Query string value wins unless it is missing or empty, then the form body is used.
pub fn select_text(query_text: Option<String>, form_text: Option<String>) -> Option<String> {
    query_text
        .filter(|text| !text.is_empty())
        .or(form_text)
}

pub fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, |text| text.trim().is_empty())
}

/// Renders a score the way the web front end always has: shortest round-trip
/// digits, `.0` on whole numbers, and a signed two-digit exponent below `1e-4`
/// or from `1e16` up (`6.628e-05`, `1e+16`).
pub fn format_score(score: f64) -> String {
    if score.is_nan() {
        return "nan".to_owned();
    }
    if score.is_infinite() {
        return if score > 0.0 { "inf".to_owned() } else { "-inf".to_owned() };
    }

    // Debug already switches to scientific notation at the same thresholds
    let debug = format!("{:?}", score);
    let Some((mantissa, exponent)) = debug.split_once('e') else {
        return debug;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

/// `None` when the classifier rejected the text.
pub fn format_response(result: &EmotionScoreSet) -> Option<String> {
    let dominant = result.dominant_emotion?;
    let scores = &result.scores;
    Some(format!(
        "For the given statement, the system response is 'anger': {}, 'disgust': {}, 'fear': {}, 'joy': {} and 'sadness': {}. The dominant emotion is {}.",
        format_score(scores.anger),
        format_score(scores.disgust),
        format_score(scores.fear),
        format_score(scores.joy),
        format_score(scores.sadness),
        dominant
    ))
}

/// Errors only when the classifier itself could not be reached or answered garbage.
pub async fn detect_emotion(service: &CommonService, text: Option<&str>) -> Result<String> {
    let text = match text {
        Some(text) if !is_blank(Some(text)) => text,
        _ => {
            debug!("blank text submitted");
            return Ok(INVALID_TEXT_MESSAGE.to_owned());
        },
    };

    let result = service.emotion_detector(text).await?;
    if result.is_rejected() {
        info!("classifier rejected text of {} chars", text.chars().count());
        return Ok(INVALID_TEXT_MESSAGE.to_owned());
    }

    info!("detected {:?} for text of {} chars", result.dominant_emotion, text.chars().count());
    Ok(format_response(&result).unwrap_or_else(|| INVALID_TEXT_MESSAGE.to_owned()))
}
