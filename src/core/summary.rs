use crate::domain::model::InfoMessage;
use crate::utils::error::{Result, TrackerError};
use serde::Serialize;
use std::fmt;

impl InfoMessage {
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    training_type: &'a str,
    duration: String,
    distance: String,
    speed: String,
    calories: String,
}

impl<'a> From<&'a InfoMessage> for CsvRow<'a> {
    fn from(message: &'a InfoMessage) -> Self {
        Self {
            training_type: &message.training_type,
            duration: format!("{:.3}", message.duration),
            distance: format!("{:.3}", message.distance),
            speed: format!("{:.3}", message.speed),
            calories: format!("{:.3}", message.calories),
        }
    }
}

/// Renders workout summaries, in input order, as one document.
pub fn render_reports(messages: &[InfoMessage], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(messages
            .iter()
            .map(|message| format!("{}\n", message.get_message()))
            .collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(messages)?)),
        OutputFormat::Csv => render_csv(messages),
    }
}

fn render_csv(messages: &[InfoMessage]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if messages.is_empty() {
        writer.write_record(["training_type", "duration", "distance", "speed", "calories"])?;
    }
    for message in messages {
        writer.serialize(CsvRow::from(message))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TrackerError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_message() -> InfoMessage {
        InfoMessage {
            training_type: "Running".to_string(),
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 699.75,
        }
    }

    #[test]
    fn test_get_message() {
        assert_eq!(
            running_message().get_message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn test_display_matches_message() {
        let message = running_message();
        assert_eq!(message.to_string(), message.get_message());
    }

    #[test]
    fn test_three_decimal_rounding() {
        let message = InfoMessage {
            training_type: "Swimming".to_string(),
            duration: 1.5,
            distance: 0.9936,
            speed: 1.0004,
            calories: 336.0,
        };
        let text = message.get_message();
        assert!(text.contains("Длительность: 1.500 ч."));
        assert!(text.contains("Дистанция: 0.994 км"));
        assert!(text.contains("Ср. скорость: 1.000 км/ч"));
        assert!(text.contains("Потрачено ккал: 336.000."));
    }

    #[test]
    fn test_render_text() {
        let rendered = render_reports(&[running_message()], OutputFormat::Text).unwrap();
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_render_json() {
        let rendered = render_reports(&[running_message()], OutputFormat::Json).unwrap();
        let parsed: Vec<InfoMessage> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, vec![running_message()]);
    }

    #[test]
    fn test_render_csv() {
        let rendered = render_reports(&[running_message()], OutputFormat::Csv).unwrap();
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("training_type,duration,distance,speed,calories"));
        assert_eq!(lines.next(), Some("Running,1.000,9.750,9.750,699.750"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_render_csv_empty_keeps_header() {
        let rendered = render_reports(&[], OutputFormat::Csv).unwrap();
        assert_eq!(rendered.trim_end(), "training_type,duration,distance,speed,calories");
    }
}
