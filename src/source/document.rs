//! Decoding of yearly weather documents.
//!
//! Both formats hold a `weather` root with repeated `record` children:
//!
//! ```text
//! {"weather": {"record": [{"date": "01/01/2010", "time": "00:00", "ws": 4.1, "sr": 0}]}}
//!
//! <weather><record><date>01/01/2010</date><time>00:00</time><ws>4.1</ws><sr>0</sr></record></weather>
//! ```

use crate::source::error::SourceError;
use crate::types::observation::{RawField, RawRecord};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Xml,
    Json,
}

impl DocumentFormat {
    /// Lookup order for cached and remote documents.
    pub const ALL: [DocumentFormat; 2] = [DocumentFormat::Xml, DocumentFormat::Json];

    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Xml => "xml",
            DocumentFormat::Json => "json",
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "xml" => Some(DocumentFormat::Xml),
            "json" => Some(DocumentFormat::Json),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[derive(Deserialize)]
struct JsonDocument {
    weather: JsonWeather,
}

#[derive(Deserialize)]
struct JsonWeather {
    #[serde(default)]
    record: Vec<RawRecord>,
}

#[derive(Deserialize)]
struct XmlWeather {
    #[serde(default)]
    record: Vec<XmlRecord>,
}

#[derive(Deserialize)]
struct XmlRecord {
    #[serde(default)]
    date: String,
    #[serde(default)]
    time: String,
    #[serde(default)]
    ws: String,
    #[serde(default)]
    sr: String,
}

impl From<XmlRecord> for RawRecord {
    fn from(record: XmlRecord) -> Self {
        RawRecord {
            date: RawField::Text(record.date),
            time: RawField::Text(record.time),
            ws: RawField::Text(record.ws),
            sr: RawField::Text(record.sr),
        }
    }
}

/// Decodes the records of a weather document, in document order.
pub fn parse_document(
    bytes: &[u8],
    format: DocumentFormat,
) -> Result<Vec<RawRecord>, SourceError> {
    match format {
        DocumentFormat::Json => {
            let document: JsonDocument = serde_json::from_slice(bytes)?;
            Ok(document.weather.record)
        }
        DocumentFormat::Xml => {
            let weather: XmlWeather = serde_xml_rs::from_reader(bytes)?;
            Ok(weather.record.into_iter().map(RawRecord::from).collect())
        }
    }
}
