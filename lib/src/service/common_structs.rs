
use std::fmt;
use serde::{Deserialize, Serialize};


#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    // canonical order, also the tie-break order for the dominant emotion
    pub const ALL: [Emotion; 5] = [Emotion::Anger, Emotion::Disgust, Emotion::Fear, Emotion::Joy, Emotion::Sadness];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    pub fn score(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// Every score finite and within `0.0..=1.0`.
    pub fn is_in_range(&self) -> bool {
        Emotion::ALL
            .into_iter()
            .all(|emotion| (0.0..=1.0).contains(&self.score(emotion)))
    }

    /// Emotion with the highest score. Ties go to the earliest emotion in [`Emotion::ALL`].
    pub fn dominant(&self) -> Emotion {
        Emotion::ALL
            .into_iter()
            .fold(Emotion::Anger, |best, emotion| {
                if self.score(emotion) > self.score(best) { emotion } else { best }
            })
    }
}


/// Result of one classification. `dominant_emotion` is `None` when the
/// classifier rejected the text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct EmotionScoreSet {
    #[serde(flatten)]
    pub scores: EmotionScores,
    #[serde(default)]
    pub dominant_emotion: Option<Emotion>,
}

impl EmotionScoreSet {
    pub fn classified(scores: EmotionScores) -> Self {
        Self {
            dominant_emotion: Some(scores.dominant()),
            scores,
        }
    }

    pub fn rejected() -> Self {
        Self::default()
    }

    pub fn is_rejected(&self) -> bool {
        self.dominant_emotion.is_none()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scores(anger: f64, disgust: f64, fear: f64, joy: f64, sadness: f64) -> EmotionScores {
        EmotionScores { anger, disgust, fear, joy, sadness }
    }

    #[test]
    fn test_dominant_is_highest_score() {
        assert_eq!(scores(0.01, 0.01, 0.01, 0.95, 0.02).dominant(), Emotion::Joy);
        assert_eq!(scores(0.1, 0.2, 0.3, 0.1, 0.8).dominant(), Emotion::Sadness);
        assert_eq!(scores(0.9, 0.2, 0.3, 0.1, 0.0).dominant(), Emotion::Anger);
    }

    #[test]
    fn test_dominant_tie_prefers_canonical_order() {
        assert_eq!(scores(0.1, 0.5, 0.5, 0.5, 0.1).dominant(), Emotion::Disgust);
        assert_eq!(EmotionScores::default().dominant(), Emotion::Anger);
    }

    #[test]
    fn test_is_in_range() {
        assert!(scores(0.0, 1.0, 0.5, 0.25, 0.0).is_in_range());
        assert!(!scores(-0.01, 0.2, 0.2, 0.2, 0.2).is_in_range());
        assert!(!scores(0.2, 0.2, 1.01, 0.2, 0.2).is_in_range());
        assert!(!scores(0.2, 0.2, 0.2, f64::NAN, 0.2).is_in_range());
    }

    #[test]
    fn test_classified_and_rejected() {
        let set = EmotionScoreSet::classified(scores(0.0, 0.0, 0.7, 0.2, 0.1));
        assert_eq!(set.dominant_emotion, Some(Emotion::Fear));
        assert!(!set.is_rejected());

        let rejected = EmotionScoreSet::rejected();
        assert!(rejected.is_rejected());
        assert_eq!(rejected.scores, EmotionScores::default());
    }

    #[test]
    fn test_score_set_wire_shape() {
        let set = EmotionScoreSet::classified(scores(0.01, 0.01, 0.01, 0.95, 0.02));
        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value, json!({
            "anger": 0.01,
            "disgust": 0.01,
            "fear": 0.01,
            "joy": 0.95,
            "sadness": 0.02,
            "dominant_emotion": "joy"
        }));

        let missing_dominant: EmotionScoreSet = serde_json::from_value(json!({
            "anger": 0.2, "disgust": 0.2, "fear": 0.2, "joy": 0.2, "sadness": 0.2
        })).unwrap();
        assert!(missing_dominant.is_rejected());

        let null_dominant: EmotionScoreSet = serde_json::from_value(json!({
            "anger": 0.2, "disgust": 0.2, "fear": 0.2, "joy": 0.2, "sadness": 0.2,
            "dominant_emotion": null
        })).unwrap();
        assert!(null_dominant.is_rejected());
    }
}
