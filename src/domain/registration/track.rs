//! Problem track catalog
//!
//! The catalog is compiled in and versioned. The wizard and the endpoint both
//! read it from here, so a slug accepted by one is accepted by the other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog version, bumped whenever a track is added, removed or renamed
pub const TRACK_CATALOG_VERSION: &str = "2025.1";

/// Returned when a slug is not part of the catalog
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown problem track '{0}'")]
pub struct UnknownTrack(pub String);

/// A problem statement a team can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemTrack {
    SentimentAnalysis,
    EducationalApp,
    AgriChatbot,
    DisasterAlert,
    OcrSystem,
    AncientScripts,
    DecipherInscriptions,
    VoiceBot,
    FakeNewsDetection,
    MovieTrends,
    GrammarErrorDetection,
    SongGenreClassification,
    TextSummarization,
    SpeechRecognition,
    CropPrediction,
    IndustrialGrowthPrediction,
    FolkSongClassification,
    TravelGuideChatbot,
    SculptureRecognition,
}

impl ProblemTrack {
    /// All tracks in display order
    pub const ALL: [ProblemTrack; 19] = [
        Self::SentimentAnalysis,
        Self::EducationalApp,
        Self::AgriChatbot,
        Self::DisasterAlert,
        Self::OcrSystem,
        Self::AncientScripts,
        Self::DecipherInscriptions,
        Self::VoiceBot,
        Self::FakeNewsDetection,
        Self::MovieTrends,
        Self::GrammarErrorDetection,
        Self::SongGenreClassification,
        Self::TextSummarization,
        Self::SpeechRecognition,
        Self::CropPrediction,
        Self::IndustrialGrowthPrediction,
        Self::FolkSongClassification,
        Self::TravelGuideChatbot,
        Self::SculptureRecognition,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::SentimentAnalysis => "sentiment-analysis",
            Self::EducationalApp => "educational-app",
            Self::AgriChatbot => "agri-chatbot",
            Self::DisasterAlert => "disaster-alert",
            Self::OcrSystem => "ocr-system",
            Self::AncientScripts => "ancient-scripts",
            Self::DecipherInscriptions => "decipher-inscriptions",
            Self::VoiceBot => "voice-bot",
            Self::FakeNewsDetection => "fake-news-detection",
            Self::MovieTrends => "movie-trends",
            Self::GrammarErrorDetection => "grammar-error-detection",
            Self::SongGenreClassification => "song-genre-classification",
            Self::TextSummarization => "text-summarization",
            Self::SpeechRecognition => "speech-recognition",
            Self::CropPrediction => "crop-prediction",
            Self::IndustrialGrowthPrediction => "industrial-growth-prediction",
            Self::FolkSongClassification => "folk-song-classification",
            Self::TravelGuideChatbot => "travel-guide-chatbot",
            Self::SculptureRecognition => "sculpture-recognition",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::SentimentAnalysis => "Sentiment Analysis of Tamil Tweets",
            Self::EducationalApp => "Tamil Educational App for Children",
            Self::AgriChatbot => "Tamil Agri Support Chatbot",
            Self::DisasterAlert => "Disaster Alert System in Tamil",
            Self::OcrSystem => "OCR System for Handwritten Tamil Documents",
            Self::AncientScripts => "Recognizing Ancient Tamil Scripts (like Brahmi)",
            Self::DecipherInscriptions => "Decipher Ancient Tamil Inscriptions",
            Self::VoiceBot => "Tamil Voice Bot for Government Welfare Services",
            Self::FakeNewsDetection => "Detect Fake News in Tamil Language",
            Self::MovieTrends => "Trends in Tamil Movie Industry",
            Self::GrammarErrorDetection => "Tamil Grammatical Error Detection",
            Self::SongGenreClassification => "Genre Classification of Tamil Songs (Lyrics-Based)",
            Self::TextSummarization => "Tamil Automatic Text Summarization",
            Self::SpeechRecognition => "Tamil Automatic Speech Recognition (ASR)",
            Self::CropPrediction => "District-wise Agriculture Crop Prediction",
            Self::IndustrialGrowthPrediction => {
                "Tamil Nadu District-wise Industrial Growth Prediction"
            }
            Self::FolkSongClassification => "Tamil Nadu Folk Song Genre Classification",
            Self::TravelGuideChatbot => "Automatic Tamil Travel Guide Chatbot",
            Self::SculptureRecognition => "Recognition of Tamil Kingdom Sculpture Styles",
        }
    }

    /// 1-based position in the catalog
    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|track| track == self)
            .map_or(0, |index| index + 1)
    }
}

impl FromStr for ProblemTrack {
    type Err = UnknownTrack;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|track| track.slug() == s)
            .ok_or_else(|| UnknownTrack(s.to_string()))
    }
}

impl fmt::Display for ProblemTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}
