//! Fixed prompt fragments.

use crate::preprocessing::{ImageStyle, TextStyle, Tone, VideoStyle};

pub const EXPERT_ROLE: &str = "You are an expert in this field.";

pub fn tone_instruction(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => "Maintain a professional and informative tone.",
        Tone::Casual => "Use a casual, conversational tone.",
        Tone::Creative => "Be creative and imaginative in your response.",
        Tone::Technical => "Provide detailed technical information with precision.",
        Tone::Friendly => "Be warm, friendly, and approachable.",
        Tone::Formal => "Use formal language and proper business etiquette.",
    }
}

/// Checked in this order; every present style adds its paragraph.
pub const TEXT_STYLE_INSTRUCTIONS: &[(TextStyle, &str)] = &[
    (
        TextStyle::Detailed,
        "Provide a comprehensive and detailed response with examples.",
    ),
    (TextStyle::Concise, "Keep the response concise and to the point."),
    (
        TextStyle::StepByStep,
        "Break down your response into clear, numbered steps.",
    ),
    (
        TextStyle::WithExamples,
        "Include relevant examples to illustrate your points.",
    ),
];

pub const STRUCTURED_CLOSING: &str = "Provide a well-structured response.";

pub const FORMATTED_INSTRUCTION: &str =
    "Format your response with clear headings and bullet points where appropriate.";

pub const IMAGE_ENHANCEMENTS: &[(ImageStyle, &[&str])] = &[
    (
        ImageStyle::Photorealistic,
        &["photorealistic", "high quality", "8k resolution"],
    ),
    (
        ImageStyle::Artistic,
        &["artistic", "creative interpretation", "expressive"],
    ),
    (
        ImageStyle::Minimalist,
        &["minimalist design", "clean", "simple composition"],
    ),
    (
        ImageStyle::Detailed,
        &["highly detailed", "intricate", "fine details"],
    ),
    (ImageStyle::Vibrant, &["vibrant colors", "saturated", "vivid"]),
    (
        ImageStyle::Cinematic,
        &["cinematic lighting", "dramatic", "film quality"],
    ),
];

pub const NATURAL_LANGUAGE_QUALITY: &str = "high quality, detailed";

pub const MIDJOURNEY_RAW_STYLE: &str = "--style raw";
pub const MIDJOURNEY_STYLIZE: &str = "--stylize 1000";
pub const MIDJOURNEY_VERSION: &str = "--v 6";
pub const MIDJOURNEY_ASPECT_RATIO: &str = "--ar 16:9";

pub const KEYWORD_QUALITY_BOOSTERS: &str = "masterpiece, best quality, sharp focus";
pub const NEGATIVE_PROMPT: &str = "Negative prompt: blurry, low quality, distorted, deformed";

pub const VIDEO_CONCEPT_PREFIX: &str = "Create a detailed video concept for: ";

/// (style, heading line, requirements line)
pub const VIDEO_FORMAT_BLOCKS: &[(VideoStyle, &str, &str)] = &[
    (
        VideoStyle::ShortForm,
        "Format: 15-60 second short-form video (TikTok/Reels/Shorts)",
        "Include: Hook (first 3 seconds), main content, and call-to-action",
    ),
    (
        VideoStyle::LongForm,
        "Format: 5-15 minute long-form video (YouTube)",
        "Include: Introduction, main content sections with timestamps, and conclusion",
    ),
];

pub const VIDEO_STYLE_BLOCKS: &[(VideoStyle, &str, &str)] = &[
    (
        VideoStyle::Tutorial,
        "Style: Educational tutorial",
        "Include: Clear step-by-step instructions, visual demonstrations, and key takeaways",
    ),
    (
        VideoStyle::Cinematic,
        "Style: Cinematic production",
        "Include: Shot descriptions, camera movements, lighting notes, and mood/atmosphere",
    ),
    (
        VideoStyle::Animated,
        "Style: Animated video",
        "Include: Animation style, character descriptions, transitions, and visual effects",
    ),
];

pub const VIDEO_INCLUSIONS: &[(VideoStyle, &str)] = &[
    (VideoStyle::WithNarration, "Voiceover script with timing"),
    (VideoStyle::WithMusic, "Music/audio suggestions"),
    (
        VideoStyle::WithTextOverlays,
        "On-screen text overlays and captions",
    ),
];

pub const VIDEO_GPT4_CLOSING: &str =
    "Provide the output in a structured format with clear sections.";
pub const VIDEO_CLAUDE_CLOSING: &str =
    "Organize the response with clear headings and detailed descriptions for each scene/section.";

pub const VIDEO_TECHNICAL_SPECS: &str =
    "Include: Technical specifications (resolution, aspect ratio, frame rate recommendations)";
