//! Prompts for image generators.

use super::builder::{reference_block, PromptBuilder};
use super::templates::{
    IMAGE_ENHANCEMENTS, KEYWORD_QUALITY_BOOSTERS, MIDJOURNEY_ASPECT_RATIO, MIDJOURNEY_RAW_STYLE,
    MIDJOURNEY_STYLIZE, MIDJOURNEY_VERSION, NATURAL_LANGUAGE_QUALITY, NEGATIVE_PROMPT,
};
use super::traits::Synthesizer;
use crate::catalog::{Domain, Template};
use crate::preprocessing::{ImageStyle, ModelFamily, Request};

type Assembler = fn(&mut PromptBuilder, &Request<ImageStyle>, &[&str]);

#[derive(Debug, Default, Clone, Copy)]
pub struct ImageSynthesizer;

impl Synthesizer for ImageSynthesizer {
    type Style = ImageStyle;

    const DOMAIN: Domain = Domain::Image;

    /// The prompt body stays a single comma-separated line so platform
    /// parameters can trail it; a matched template goes in front instead.
    fn synthesize(&self, request: &Request<ImageStyle>, template: Option<&Template>) -> String {
        let mut prompt = PromptBuilder::new();
        if let Some(template) = template {
            prompt.push(&reference_block(template)).push("\n\n");
        }
        prompt.push(request.query());

        let enhancements: Vec<&str> = IMAGE_ENHANCEMENTS
            .iter()
            .filter(|(style, _)| request.has(*style))
            .flat_map(|(_, phrases)| phrases.iter().copied())
            .collect();

        if let Some(assemble) = assembler(request.model().family) {
            assemble(&mut prompt, request, &enhancements);
        }

        prompt.finish()
    }
}

fn assembler(family: ModelFamily) -> Option<Assembler> {
    match family {
        ModelFamily::DallE3 => Some(natural_language as Assembler),
        ModelFamily::Midjourney => Some(parameter_syntax as Assembler),
        ModelFamily::StableDiffusion => Some(keyword_list as Assembler),
        ModelFamily::Gpt4 | ModelFamily::Claude | ModelFamily::Other => None,
    }
}

fn natural_language(prompt: &mut PromptBuilder, request: &Request<ImageStyle>, enhancements: &[&str]) {
    prompt.list(enhancements);
    if !request.has(ImageStyle::Photorealistic) {
        prompt.list(&[NATURAL_LANGUAGE_QUALITY]);
    }
}

fn parameter_syntax(prompt: &mut PromptBuilder, request: &Request<ImageStyle>, enhancements: &[&str]) {
    prompt.list(enhancements);

    let mut params = Vec::with_capacity(4);
    if request.has(ImageStyle::Photorealistic) {
        params.push(MIDJOURNEY_RAW_STYLE);
    }
    if request.has(ImageStyle::Artistic) {
        params.push(MIDJOURNEY_STYLIZE);
    }
    params.push(MIDJOURNEY_VERSION);
    params.push(MIDJOURNEY_ASPECT_RATIO);

    prompt.push(" ").push(&params.join(" "));
}

fn keyword_list(prompt: &mut PromptBuilder, _request: &Request<ImageStyle>, enhancements: &[&str]) {
    prompt.list(enhancements);
    prompt.list(&[KEYWORD_QUALITY_BOOSTERS]);
    prompt.paragraph(NEGATIVE_PROMPT);
}
