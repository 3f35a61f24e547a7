//! Prompts for video generation and video content planning.

use super::builder::PromptBuilder;
use super::templates::{
    VIDEO_CLAUDE_CLOSING, VIDEO_CONCEPT_PREFIX, VIDEO_FORMAT_BLOCKS, VIDEO_GPT4_CLOSING,
    VIDEO_INCLUSIONS, VIDEO_STYLE_BLOCKS, VIDEO_TECHNICAL_SPECS,
};
use super::traits::Synthesizer;
use crate::catalog::{Domain, Template};
use crate::preprocessing::{ModelFamily, Request, VideoStyle};

#[derive(Debug, Default, Clone, Copy)]
pub struct VideoSynthesizer;

impl Synthesizer for VideoSynthesizer {
    type Style = VideoStyle;

    const DOMAIN: Domain = Domain::Video;

    fn synthesize(&self, request: &Request<VideoStyle>, template: Option<&Template>) -> String {
        let mut prompt = PromptBuilder::starting_with(VIDEO_CONCEPT_PREFIX);
        prompt.push(request.query());

        // Short and long form are meant to be exclusive; both render if both are set.
        for (style, heading, requirements) in VIDEO_FORMAT_BLOCKS.iter().chain(VIDEO_STYLE_BLOCKS) {
            if request.has(*style) {
                prompt.paragraph(heading).line(requirements);
            }
        }

        let inclusions: Vec<&str> = VIDEO_INCLUSIONS
            .iter()
            .filter(|(style, _)| request.has(*style))
            .map(|(_, item)| *item)
            .collect();
        if !inclusions.is_empty() {
            prompt.paragraph(&format!("Include: {}", inclusions.join(", ")));
        }

        prompt.reference(template);

        if let Some(closing) = closing(request.model().family) {
            prompt.paragraph(closing);
        }

        if request.has(VideoStyle::Professional) {
            prompt.paragraph(VIDEO_TECHNICAL_SPECS);
        }

        prompt.finish()
    }
}

fn closing(family: ModelFamily) -> Option<&'static str> {
    match family {
        ModelFamily::Gpt4 => Some(VIDEO_GPT4_CLOSING),
        ModelFamily::Claude => Some(VIDEO_CLAUDE_CLOSING),
        ModelFamily::DallE3
        | ModelFamily::Midjourney
        | ModelFamily::StableDiffusion
        | ModelFamily::Other => None,
    }
}
