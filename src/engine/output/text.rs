//! Prompts for text LLMs.

use super::builder::PromptBuilder;
use super::templates::{
    tone_instruction, EXPERT_ROLE, FORMATTED_INSTRUCTION, STRUCTURED_CLOSING,
    TEXT_STYLE_INSTRUCTIONS,
};
use super::traits::Synthesizer;
use crate::catalog::{Domain, Template};
use crate::preprocessing::{ModelFamily, Request, TextStyle};

type ModelRule = fn(&mut PromptBuilder, &Request<TextStyle>);

#[derive(Debug, Default, Clone, Copy)]
pub struct TextSynthesizer;

impl Synthesizer for TextSynthesizer {
    type Style = TextStyle;

    const DOMAIN: Domain = Domain::Text;

    fn synthesize(&self, request: &Request<TextStyle>, template: Option<&Template>) -> String {
        let mut prompt = PromptBuilder::new();

        if request.has(TextStyle::Expert) {
            prompt.sentence(EXPERT_ROLE);
        }
        prompt.sentence(tone_instruction(request.tone().unwrap_or_default()));
        prompt.push(request.query());

        for (style, instruction) in TEXT_STYLE_INSTRUCTIONS {
            if request.has(*style) {
                prompt.paragraph(instruction);
            }
        }

        prompt.reference(template);

        if let Some(rule) = model_rule(request.model().family) {
            rule(&mut prompt, request);
        }

        prompt.finish()
    }
}

fn model_rule(family: ModelFamily) -> Option<ModelRule> {
    match family {
        ModelFamily::Claude => Some(claude_structured as ModelRule),
        ModelFamily::Gpt4 => Some(gpt4_formatted as ModelRule),
        ModelFamily::DallE3
        | ModelFamily::Midjourney
        | ModelFamily::StableDiffusion
        | ModelFamily::Other => None,
    }
}

/// Claude follows tag-delimited task blocks well.
fn claude_structured(prompt: &mut PromptBuilder, request: &Request<TextStyle>) {
    if request.has(TextStyle::Structured) {
        prompt.wrap(|text| format!("<task>\n{text}\n</task>\n\n{STRUCTURED_CLOSING}"));
    }
}

fn gpt4_formatted(prompt: &mut PromptBuilder, request: &Request<TextStyle>) {
    if request.has(TextStyle::Formatted) {
        prompt.paragraph(FORMATTED_INSTRUCTION);
    }
}
