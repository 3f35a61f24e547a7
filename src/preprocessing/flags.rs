use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::catalog::Domain;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownFlag {
    pub kind: &'static str,
    pub value: String,
}

/// A user-selectable tag from one domain's fixed vocabulary.
pub trait StyleFlag: Copy + Eq + fmt::Debug + FromStr<Err = UnknownFlag> + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;
}

macro_rules! style_flags {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(#[serde(rename = $tag)] $variant),+
        }

        impl StyleFlag for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $tag),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownFlag;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok(Self::$variant),)+
                    _ => Err(UnknownFlag { kind: $kind, value: s.to_string() }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

style_flags!(
    /// Style tags offered by the text generator.
    TextStyle, "text style" {
        Detailed => "detailed",
        Concise => "concise",
        StepByStep => "step-by-step",
        WithExamples => "with-examples",
        Expert => "expert",
        Structured => "structured",
        Formatted => "formatted",
    }
);

style_flags!(
    /// Style tags offered by the image generator.
    ImageStyle, "image style" {
        Photorealistic => "photorealistic",
        Artistic => "artistic",
        Minimalist => "minimalist",
        Detailed => "detailed",
        Vibrant => "vibrant",
        Cinematic => "cinematic",
        Abstract => "abstract",
        Cartoon => "cartoon",
        ThreeDRender => "3d-render",
    }
);

style_flags!(
    /// Style tags offered by the video generator.
    VideoStyle, "video style" {
        ShortForm => "short-form",
        LongForm => "long-form",
        Tutorial => "tutorial",
        Cinematic => "cinematic",
        Animated => "animated",
        WithNarration => "with-narration",
        WithMusic => "with-music",
        WithTextOverlays => "with-text-overlays",
        Professional => "professional",
        CasualVlog => "casual-vlog",
    }
);

/// Insertion-ordered set of style flags.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct FlagSet<S> {
    flags: Vec<S>,
}

impl<S: StyleFlag> FlagSet<S> {
    pub fn new() -> Self {
        Self { flags: Vec::new() }
    }

    /// Returns false when the flag was already present.
    pub fn insert(&mut self, flag: S) -> bool {
        if self.contains(flag) {
            return false;
        }
        self.flags.push(flag);
        true
    }

    pub fn contains(&self, flag: S) -> bool {
        self.flags.contains(&flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = S> + '_ {
        self.flags.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Parses raw tags, rejecting the first one outside the vocabulary.
    pub fn parse<'a, I>(tags: I) -> Result<Self, UnknownFlag>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter().map(|tag| tag.parse::<S>()).collect()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(|flag| flag.as_str().to_string()).collect()
    }
}

impl<S: StyleFlag> Default for FlagSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StyleFlag> FromIterator<S> for FlagSet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

impl<S: StyleFlag> IntoIterator for FlagSet<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.flags.into_iter()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Creative,
    Technical,
    Friendly,
    Formal,
}

impl Tone {
    pub const ALL: &'static [Tone] = &[
        Tone::Professional,
        Tone::Casual,
        Tone::Creative,
        Tone::Technical,
        Tone::Friendly,
        Tone::Formal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Creative => "creative",
            Tone::Technical => "technical",
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
        }
    }

    /// Unrecognized tones fall back to the default.
    pub fn select_tone(tone: &str) -> Self {
        tone.parse().unwrap_or_default()
    }
}

impl FromStr for Tone {
    type Err = UnknownFlag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .iter()
            .copied()
            .find(|tone| tone.as_str() == s)
            .ok_or_else(|| UnknownFlag {
                kind: "tone",
                value: s.to_string(),
            })
    }
}

/// Platform families that get their own synthesis branch.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    Gpt4,
    Claude,
    /// Natural-language prompts.
    DallE3,
    /// Trailing `--param` syntax.
    Midjourney,
    /// Keyword lists with a negative prompt.
    StableDiffusion,
    Other,
}

impl ModelFamily {
    pub fn from_label(label: &str) -> Self {
        match label {
            "GPT-4" => ModelFamily::Gpt4,
            "Claude" => ModelFamily::Claude,
            "DALL-E 3" => ModelFamily::DallE3,
            "Midjourney" => ModelFamily::Midjourney,
            "Stable Diffusion" => ModelFamily::StableDiffusion,
            _ => ModelFamily::Other,
        }
    }
}

/// The destination model as the user picked it. Labels come from an open
/// set; anything unrecognized lands in `ModelFamily::Other`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TargetModel {
    pub label: String,
    pub family: ModelFamily,
}

impl TargetModel {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let family = ModelFamily::from_label(&label);
        Self { label, family }
    }
}

impl From<&str> for TargetModel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Model labels suggested for each generator.
pub fn known_models(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Text => &["GPT-4", "GPT-3.5 Turbo", "Claude", "Claude Instant", "Gemini Pro"],
        Domain::Image => &["DALL-E 3", "DALL-E 2", "Midjourney", "Stable Diffusion", "Ideogram"],
        Domain::Video => &["Runway Gen-2", "Pika", "Stable Video", "GPT-4 (Script)"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_tags_round_trip_through_strings() {
        for flag in VideoStyle::ALL {
            assert_eq!(flag.as_str().parse::<VideoStyle>(), Ok(*flag));
        }
        assert_eq!("3d-render".parse::<ImageStyle>(), Ok(ImageStyle::ThreeDRender));
    }

    #[test]
    fn unknown_tags_are_rejected() {
        let err = "sparkly".parse::<TextStyle>().unwrap_err();
        assert_eq!(err.kind, "text style");
        assert_eq!(err.value, "sparkly");
        // Tags are domain specific.
        assert!("photorealistic".parse::<TextStyle>().is_err());
    }

    #[test]
    fn flag_set_keeps_first_insertion_order() {
        let set: FlagSet<TextStyle> = [TextStyle::Concise, TextStyle::Expert, TextStyle::Concise]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_strings(), vec!["concise", "expert"]);
    }

    #[test]
    fn flag_set_iterates_by_value_in_order() {
        let parsed = FlagSet::<VideoStyle>::parse(["tutorial", "with-music", "tutorial"]).unwrap();
        let flags: Vec<VideoStyle> = parsed.into_iter().collect();
        assert_eq!(flags, vec![VideoStyle::Tutorial, VideoStyle::WithMusic]);
    }

    #[test]
    fn flag_set_parse_stops_at_unknown_tag() {
        let parsed = FlagSet::<ImageStyle>::parse(["vibrant", "neon"]);
        assert_eq!(parsed.unwrap_err().value, "neon");
    }

    #[test]
    fn unknown_tone_falls_back_to_professional() {
        assert_eq!(Tone::select_tone("casual"), Tone::Casual);
        assert_eq!(Tone::select_tone("sarcastic"), Tone::Professional);
    }

    #[test]
    fn model_labels_map_to_families() {
        assert_eq!(TargetModel::new("Midjourney").family, ModelFamily::Midjourney);
        // Labels match exactly; the video script model is not the GPT-4 family.
        assert_eq!(TargetModel::new("GPT-4 (Script)").family, ModelFamily::Other);
        assert_eq!(TargetModel::new("Claude Instant").family, ModelFamily::Other);
        assert_eq!(TargetModel::new("gpt-4").family, ModelFamily::Other);
    }

    #[test]
    fn every_suggested_image_model_has_a_label() {
        assert!(known_models(Domain::Image).contains(&"Stable Diffusion"));
        assert_eq!(known_models(Domain::Video).len(), 4);
    }
}
