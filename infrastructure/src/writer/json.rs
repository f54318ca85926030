//! JSON ticket export
//!
//! One file per run: the sheet header, a UTC timestamp, and every ticket
//! with its images inlined as base64 together with their placement size.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bilet_application::{TicketWriter, TicketWriterError};
use bilet_domain::{RenderedImage, RenderedQuestion, RenderedTicket, SheetHeader};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Serialize)]
struct ExportDocument<'a> {
    generated_at: String,
    sheet: &'a SheetHeader,
    tickets: Vec<ExportTicket<'a>>,
}

#[derive(Serialize)]
struct ExportTicket<'a> {
    number: usize,
    questions: Vec<ExportQuestion<'a>>,
}

#[derive(Serialize)]
struct ExportQuestion<'a> {
    block: &'a str,
    text: &'a str,
    images: Vec<ExportImage<'a>>,
}

#[derive(Serialize)]
struct ExportImage<'a> {
    content_type: &'a str,
    format: &'static str,
    width: u32,
    height: u32,
    data: String,
}

impl<'a> From<&RenderedTicket<'a>> for ExportTicket<'a> {
    fn from(ticket: &RenderedTicket<'a>) -> Self {
        Self {
            number: ticket.number,
            questions: ticket.questions.iter().map(ExportQuestion::from).collect(),
        }
    }
}

impl<'a> From<&RenderedQuestion<'a>> for ExportQuestion<'a> {
    fn from(question: &RenderedQuestion<'a>) -> Self {
        Self {
            block: question.block_name,
            text: question.text,
            images: question.images.iter().map(ExportImage::from).collect(),
        }
    }
}

impl<'a> From<&RenderedImage<'a>> for ExportImage<'a> {
    fn from(image: &RenderedImage<'a>) -> Self {
        Self {
            content_type: image.content_type,
            format: image.format.as_str(),
            width: image.size.width,
            height: image.size.height,
            data: STANDARD.encode(image.data),
        }
    }
}

/// Writes tickets as pretty-printed JSON to a fixed path
#[derive(Debug, Clone)]
pub struct JsonTicketWriter {
    path: PathBuf,
}

impl JsonTicketWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_failed(&self, e: std::io::Error) -> TicketWriterError {
        TicketWriterError::WriteFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl TicketWriter for JsonTicketWriter {
    async fn write(
        &self,
        sheet: &SheetHeader,
        tickets: &[RenderedTicket<'_>],
    ) -> Result<String, TicketWriterError> {
        let document = ExportDocument {
            generated_at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            sheet,
            tickets: tickets.iter().map(ExportTicket::from).collect(),
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| TicketWriterError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_failed(e))?;
        }
        tokio::fs::write(&self.path, json.as_bytes())
            .await
            .map_err(|e| self.write_failed(e))?;

        debug!("Wrote {} bytes of JSON", json.len());
        Ok(self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bilet_domain::{ImageFormat, PixelSize};

    fn ticket<'a>(number: usize, image: Option<RenderedImage<'a>>) -> RenderedTicket<'a> {
        RenderedTicket {
            number,
            questions: vec![RenderedQuestion {
                block_name: "I BLOK",
                text: "Sxemi izah edin",
                images: image.into_iter().collect(),
            }],
        }
    }

    #[tokio::test]
    async fn test_writes_sheet_and_tickets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("tickets.json");
        let writer = JsonTicketWriter::new(&path);

        let image = RenderedImage {
            content_type: "image/png",
            format: ImageFormat::Png,
            data: b"abc",
            size: PixelSize::try_new(520, 300).unwrap(),
        };
        let sheet = SheetHeader {
            subject: "Şəbəkələr".to_string(),
            ..Default::default()
        };

        let destination = writer
            .write(&sheet, &[ticket(1, Some(image)), ticket(2, None)])
            .await
            .unwrap();
        assert_eq!(destination, path.display().to_string());

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["sheet"]["university"], "Bakı Biznes Universiteti");
        assert_eq!(written["sheet"]["subject"], "Şəbəkələr");
        assert_eq!(written["tickets"].as_array().unwrap().len(), 2);

        let first_image = &written["tickets"][0]["questions"][0]["images"][0];
        assert_eq!(first_image["format"], "png");
        assert_eq!(first_image["width"], 520);
        assert_eq!(first_image["data"], "YWJj");
        assert_eq!(written["tickets"][1]["questions"][0]["block"], "I BLOK");
        assert!(written["generated_at"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let writer = JsonTicketWriter::new(blocker.join("tickets.json"));

        let err = writer
            .write(&SheetHeader::default(), &[ticket(1, None)])
            .await
            .unwrap_err();
        assert!(matches!(err, TicketWriterError::WriteFailed { .. }));
    }
}
