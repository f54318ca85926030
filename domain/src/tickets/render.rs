//! Tickets resolved for a document writer.
//!
//! Writers get text, image bytes, a format tag and the final placement
//! size; they do no measuring of their own.

use super::assembly::Ticket;
use crate::media::{ImageFormat, ImageLayout, PixelSize};
use crate::exam::QuestionImage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage<'a> {
    pub content_type: &'a str,
    pub format: ImageFormat,
    pub data: &'a [u8],
    pub size: PixelSize,
}

impl<'a> RenderedImage<'a> {
    pub fn new(image: &'a QuestionImage, layout: &ImageLayout) -> Self {
        let format = ImageFormat::sniff(image.data())
            .unwrap_or_else(|| ImageFormat::from_content_type(image.content_type()));
        Self {
            content_type: image.content_type(),
            format,
            data: image.data(),
            size: layout.render_size(image),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedQuestion<'a> {
    pub block_name: &'a str,
    pub text: &'a str,
    pub images: Vec<RenderedImage<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTicket<'a> {
    pub number: usize,
    pub questions: Vec<RenderedQuestion<'a>>,
}

impl RenderedTicket<'_> {
    pub fn image_count(&self) -> usize {
        self.questions.iter().map(|q| q.images.len()).sum()
    }
}

/// Attach render sizes and format tags to assembled tickets
pub fn render_tickets<'a>(tickets: &[Ticket<'a>], layout: &ImageLayout) -> Vec<RenderedTicket<'a>> {
    tickets
        .iter()
        .map(|ticket| RenderedTicket {
            number: ticket.number,
            questions: ticket
                .questions
                .iter()
                .map(|tq| RenderedQuestion {
                    block_name: tq.block_name,
                    text: tq.question.text(),
                    images: tq
                        .question
                        .images()
                        .iter()
                        .map(|image| RenderedImage::new(image, layout))
                        .collect(),
                })
                .collect(),
        })
        .collect()
}
