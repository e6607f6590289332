use std::fmt::{self, Display, Formatter};

use chrono::{Datelike, Utc};

use super::assets::{SCRIPT, STYLESHEET};
use super::content::*;
use crate::enquiry::desk::FormInstanceId;
use crate::enquiry::flow::FormView;
use crate::enquiry::form::FormField;
use crate::enquiry::status::SUBMITTING_LABEL;

/// Name of the hidden input that carries the form instance id.
pub const FORM_INSTANCE_FIELD: &str = "form_instance";

/// The single-page site, rendered from the current form view.
#[derive(Debug, Clone, Copy)]
pub struct LandingPage<'a> {
    form_instance: Option<&'a FormInstanceId>,
    view: &'a FormView,
    year: i32,
}

impl<'a> LandingPage<'a> {
    pub fn new(form_instance: Option<&'a FormInstanceId>, view: &'a FormView) -> Self {
        Self {
            form_instance,
            view,
            year: Utc::now().year(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    fn write_head(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"utf-8\">")?;
        writeln!(f, "<title>{}</title>", escape_html(PAGE_TITLE))?;
        writeln!(
            f,
            "<meta name=\"description\" content=\"{}\">",
            escape_html(META_DESCRIPTION)
        )?;
        writeln!(
            f,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
        )?;
        writeln!(f, "<style>{STYLESHEET}</style>")?;
        writeln!(f, "<script>{SCRIPT}</script>")?;
        writeln!(f, "</head>")
    }

    fn write_hero(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "<section class=\"hero\">")?;
        writeln!(f, "<div class=\"hero-overlay\"></div>")?;
        writeln!(f, "<div class=\"hero-content\">")?;
        writeln!(f, "<header class=\"hero-header\">")?;
        writeln!(f, "<div class=\"logo\">{BRAND}</div>")?;
        write!(f, "<nav class=\"hero-nav\">")?;
        for link in NAV_LINKS {
            write!(f, "<a href=\"#{}\">{}</a>", link.anchor, link.label)?;
        }
        writeln!(f, "</nav>")?;
        writeln!(f, "</header>")?;
        writeln!(f, "<div class=\"hero-main\"><div class=\"hero-text\">")?;
        writeln!(
            f,
            "<h1>Turn your forecourt into<br>a revenue-driving radio.</h1>"
        )?;
        writeln!(f, "<p>{}</p>", escape_html(HERO_INTRO))?;
        writeln!(
            f,
            "<a class=\"primary-btn\" href=\"#{ENQUIRY_ANCHOR}\" data-scroll-to=\"{ENQUIRY_ANCHOR}\">{HERO_CTA}</a>"
        )?;
        writeln!(f, "</div></div>")?;
        writeln!(f, "<div class=\"hero-badge\">{}</div>", escape_html(HERO_BADGE))?;
        writeln!(f, "</div>")?;
        writeln!(f, "</section>")
    }

    fn write_services(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<section id=\"{SERVICES_ANCHOR}\" class=\"section section-light\"><div class=\"container\">"
        )?;
        writeln!(f, "<h2>{}</h2>", escape_html(SERVICES_HEADING))?;
        writeln!(f, "<p class=\"section-intro\">{}</p>", escape_html(SERVICES_INTRO))?;
        writeln!(f, "<div class=\"cards-grid\">")?;
        for card in SERVICES {
            writeln!(
                f,
                "<div class=\"card\"><h3>{}</h3><p>{}</p></div>",
                escape_html(card.title),
                escape_html(card.description)
            )?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</div></section>")
    }

    fn write_samples(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<section id=\"{SAMPLES_ANCHOR}\" class=\"section section-dark section-audio\">"
        )?;
        writeln!(f, "<div class=\"container audio-container\">")?;
        writeln!(
            f,
            "<div class=\"audio-header\"><h2>{}</h2><p>{}</p></div>",
            escape_html(SAMPLES_HEADING),
            escape_html(SAMPLES_INTRO)
        )?;
        writeln!(f, "<div class=\"audio-grid\">")?;
        for sample in AUDIO_SAMPLES {
            writeln!(f, "<div class=\"audio-card\">")?;
            write!(
                f,
                "<div class=\"audio-card-text\"><h3>{}</h3><p>{}</p>",
                escape_html(sample.title),
                escape_html(sample.description)
            )?;
            if let Some(duration) = sample.duration {
                write!(f, "<span class=\"audio-duration\">{}</span>", escape_html(duration))?;
            }
            writeln!(f, "</div>")?;
            writeln!(
                f,
                "<audio class=\"audio-player\" controls preload=\"none\" src=\"{}\">Your browser does not support the audio element.</audio>",
                escape_html(&sample.url())
            )?;
            writeln!(f, "</div>")?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</div></section>")
    }

    fn write_enquiry(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<section id=\"{ENQUIRY_ANCHOR}\" class=\"section section-dark\">"
        )?;
        writeln!(f, "<div class=\"container form-container\">")?;

        writeln!(f, "<div class=\"form-text\">")?;
        writeln!(f, "<h2>{}</h2>", escape_html(ENQUIRY_HEADING))?;
        writeln!(f, "<p>{}</p>", escape_html(ENQUIRY_INTRO))?;
        write!(f, "<ul>")?;
        for point in SELLING_POINTS {
            write!(f, "<li>{}</li>", escape_html(point))?;
        }
        writeln!(f, "</ul>")?;
        writeln!(f, "<div class=\"contact-direct\">")?;
        writeln!(f, "<h3>Contact us directly</h3>")?;
        writeln!(f, "<p>Prefer email or a quick call? Reach us on:</p>")?;
        for link in CONTACT_LINKS {
            writeln!(
                f,
                "<a href=\"{}\" class=\"contact-link\">{}</a>",
                escape_html(link.href),
                escape_html(link.label)
            )?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</div>")?;

        self.write_form(f)?;

        writeln!(f, "</div></section>")
    }

    fn write_form(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "<form class=\"form\" method=\"post\" action=\"/enquiry\">")?;
        if let Some(id) = self.form_instance {
            writeln!(
                f,
                "<input type=\"hidden\" name=\"{FORM_INSTANCE_FIELD}\" value=\"{}\">",
                escape_html(id.as_str())
            )?;
        }

        for field in FormField::ALL {
            write_field(f, field, self.view.fields.value(field))?;
        }

        let disabled = if self.view.submitting { " disabled" } else { "" };
        writeln!(
            f,
            "<button class=\"primary-btn full-width\" type=\"submit\" data-busy-label=\"{SUBMITTING_LABEL}\"{disabled}>{}</button>",
            self.view.submit_label()
        )?;

        let status = &self.view.status;
        if status.is_visible() {
            writeln!(
                f,
                "<p class=\"status status-{}\">{}</p>",
                status.kind.label(),
                escape_html(&status.message)
            )?;
        }

        writeln!(f, "</form>")
    }

    fn write_footer(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "<footer class=\"footer\"><div class=\"container footer-inner\">")?;
        writeln!(f, "<span>© {} {BRAND}</span>", self.year)?;
        writeln!(f, "<span>{}</span>", escape_html(FOOTER_TAGLINE))?;
        writeln!(f, "</div></footer>")
    }
}

fn write_field(f: &mut Formatter<'_>, field: FormField, value: &str) -> fmt::Result {
    writeln!(f, "<div class=\"field-group\">")?;
    writeln!(
        f,
        "<label for=\"{}\">{}</label>",
        field.element_id(),
        field.label()
    )?;

    let required = if field.required() { " required" } else { "" };
    let placeholder = field
        .placeholder()
        .map(|text| format!(" placeholder=\"{}\"", escape_html(text)))
        .unwrap_or_default();

    match field.input_type() {
        Some(kind) => writeln!(
            f,
            "<input id=\"{}\" name=\"{}\" type=\"{kind}\" value=\"{}\"{placeholder}{required}>",
            field.element_id(),
            field.input_name(),
            escape_html(value)
        )?,
        None => writeln!(
            f,
            "<textarea id=\"{}\" name=\"{}\" rows=\"4\"{placeholder}{required}>{}</textarea>",
            field.element_id(),
            field.input_name(),
            escape_html(value)
        )?,
    }

    writeln!(f, "</div>")
}

impl Display for LandingPage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        self.write_head(f)?;
        writeln!(f, "<body>")?;
        writeln!(f, "<main class=\"page\">")?;
        self.write_hero(f)?;
        self.write_services(f)?;
        self.write_samples(f)?;
        self.write_enquiry(f)?;
        self.write_footer(f)?;
        writeln!(f, "</main>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
