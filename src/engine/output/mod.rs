//! Prompt synthesis for each generator.

pub mod builder;
pub mod image;
pub mod templates;
pub mod text;
pub mod traits;
pub mod video;


pub use builder::PromptBuilder;
pub use image::ImageSynthesizer;
pub use text::TextSynthesizer;
pub use traits::Synthesizer;
pub use video::VideoSynthesizer;
