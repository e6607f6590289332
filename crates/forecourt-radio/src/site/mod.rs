//! Server-rendered landing page: hero, services, audio samples, enquiry form and footer.

pub mod assets;
pub mod content;
pub mod page;

pub use content::{is_known_sample, AudioSample, AUDIO_SAMPLES};
pub use page::{escape_html, LandingPage, FORM_INSTANCE_FIELD};
