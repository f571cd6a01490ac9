//! Paints message pane blocks.
//!
//! HTML bodies are split back into styled runs with
//! [`chat_core::markdown::segments`] and laid out as a single [`LayoutJob`].

use egui::text::{LayoutJob, TextFormat};
use egui::FontId;

use chat_core::markdown;
use chat_core::view_model::BlockBody;

use crate::theme::{CODE_BG, TEXT_STRONG};

pub const BODY_SIZE: f32 = 14.0;
pub const CODE_SIZE: f32 = 13.0;

pub fn layout_job(body: &BlockBody, color: egui::Color32, wrap_width: f32) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.wrap.max_width = wrap_width;

    match body {
        BlockBody::Text(text) => job.append(text, 0.0, plain(color)),
        BlockBody::Html(html) => {
            for segment in markdown::segments(html) {
                let mut format = plain(color);
                if segment.code {
                    format.font_id = FontId::monospace(CODE_SIZE);
                    format.background = CODE_BG;
                }
                if segment.strong {
                    format.color = TEXT_STRONG;
                }
                format.italics = segment.emphasis;
                job.append(&segment.text, 0.0, format);
            }
        }
    }
    job
}

fn plain(color: egui::Color32) -> TextFormat {
    TextFormat {
        font_id: FontId::proportional(BODY_SIZE),
        color,
        ..Default::default()
    }
}
