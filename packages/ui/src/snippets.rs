//! # Pre-built content snippets
//!
//! Pure templates the editor can insert: a snippet renders to an HTML
//! fragment string and owns no state. The fragments are class-based (styled
//! by the shared stylesheet) so they survive copy/paste between documents.
//!
//! Lookup goes through [`Snippet::from_name`] / [`render_named`]; an unknown
//! name renders as the empty string, so a stale menu entry can never fail an
//! insert.

/// Visual flavour of an [`Snippet::Alert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Warning,
    Error,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Success => "alert-success",
            AlertKind::Warning => "alert-warning",
            AlertKind::Error => "alert-error",
            AlertKind::Info => "alert-info",
        }
    }
}

/// Divider rendering style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DividerStyle {
    Gradient,
    Dots,
    Dashed,
    Solid,
}

impl DividerStyle {
    fn class(self) -> &'static str {
        match self {
            DividerStyle::Gradient => "divider-gradient",
            DividerStyle::Dots => "divider-dots",
            DividerStyle::Dashed => "divider-dashed",
            DividerStyle::Solid => "divider-solid",
        }
    }
}

/// A parameterised content snippet.
///
/// The fixed-layout variants (`Timeline`, `Pricing`, …) render placeholder
/// copy the user edits in place after inserting.
#[derive(Clone, Debug, PartialEq)]
pub enum Snippet {
    Alert {
        kind: AlertKind,
        title: String,
        message: String,
    },
    Quote {
        text: String,
        author: String,
        source: Option<String>,
    },
    Card {
        title: String,
        body: String,
        image: Option<String>,
        footer: Option<String>,
    },
    Divider {
        style: DividerStyle,
    },
    Timeline,
    Pricing,
    Testimonial,
    Faq,
    Contact,
    Gallery,
}

/// Names the insert menu offers, in menu order.
pub const NAMES: &[&str] = &[
    "alert",
    "quote",
    "card",
    "divider",
    "timeline",
    "pricing",
    "testimonial",
    "faq",
    "contact",
    "gallery",
];

impl Snippet {
    /// The default-parameter snippet for a menu name, `None` for unknown
    /// names.
    ///
    /// Defaults: alerts are `Success` with a generic notice; quotes carry a
    /// placeholder attribution and no source; cards have no image and no
    /// footer; dividers are `Gradient`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "alert" => Some(Self::Alert {
                kind: AlertKind::Success,
                title: "Heads up".to_string(),
                message: "This is an important notice for the reader.".to_string(),
            }),
            "quote" => Some(Self::Quote {
                text: "A memorable line worth quoting.".to_string(),
                author: "The author".to_string(),
                source: None,
            }),
            "card" => Some(Self::Card {
                title: "Card title".to_string(),
                body: "Card content goes here...".to_string(),
                image: None,
                footer: None,
            }),
            "divider" => Some(Self::Divider {
                style: DividerStyle::Gradient,
            }),
            "timeline" => Some(Self::Timeline),
            "pricing" => Some(Self::Pricing),
            "testimonial" => Some(Self::Testimonial),
            "faq" => Some(Self::Faq),
            "contact" => Some(Self::Contact),
            "gallery" => Some(Self::Gallery),
            _ => None,
        }
    }

    /// Render this snippet to an HTML fragment.
    pub fn render(&self) -> String {
        match self {
            Self::Alert { kind, title, message } => format!(
                r#"<div class="alert {}"><h4>{title}</h4><p>{message}</p></div>"#,
                kind.class()
            ),
            Self::Quote { text, author, source } => {
                let cite = match source {
                    Some(source) => format!("— {author}, {source}"),
                    None => format!("— {author}"),
                };
                format!(
                    r#"<blockquote class="quote"><p>"{text}"</p><cite>{cite}</cite></blockquote>"#
                )
            }
            Self::Card { title, body, image, footer } => {
                let mut html = String::from(r#"<div class="card">"#);
                if let Some(image) = image {
                    html.push_str(&format!(
                        r#"<img class="card-image" src="{image}" alt="{title}">"#
                    ));
                }
                html.push_str(&format!("<h3>{title}</h3><p>{body}</p>"));
                if let Some(footer) = footer {
                    html.push_str(&format!(r#"<div class="card-footer">{footer}</div>"#));
                }
                html.push_str("</div>");
                html
            }
            Self::Divider { style } => {
                format!(r#"<hr class="divider {}">"#, style.class())
            }
            Self::Timeline => concat!(
                r#"<div class="timeline">"#,
                r#"<div class="timeline-step"><h4>First stage</h4><p>Describe the first stage of the project.</p></div>"#,
                r#"<div class="timeline-step"><h4>Second stage</h4><p>Describe the second stage of the project.</p></div>"#,
                r#"<div class="timeline-step"><h4>Third stage</h4><p>Describe the third stage of the project.</p></div>"#,
                r#"</div>"#
            )
            .to_string(),
            Self::Pricing => concat!(
                r#"<div class="pricing">"#,
                r#"<div class="pricing-plan">"#,
                r#"<h3>Basic plan</h3><div class="pricing-amount">$29</div>"#,
                r#"<ul><li>First feature</li><li>Second feature</li><li>Third feature</li></ul>"#,
                r#"<button class="pricing-choose">Choose plan</button>"#,
                r#"</div>"#,
                r#"<div class="pricing-plan pricing-featured">"#,
                r#"<div class="pricing-badge">Most popular</div>"#,
                r#"<h3>Advanced plan</h3><div class="pricing-amount">$59</div>"#,
                r#"<ul><li>Everything in Basic</li><li>Advanced features</li><li>Priority support</li></ul>"#,
                r#"<button class="pricing-choose">Choose plan</button>"#,
                r#"</div>"#,
                r#"</div>"#
            )
            .to_string(),
            Self::Testimonial => concat!(
                r#"<div class="testimonial">"#,
                r#"<p>"A testimonial from a satisfied customer. We are proud of the quality of our work."</p>"#,
                r#"<div class="testimonial-author"><h4>Alex Morgan</h4><span>Director, Example Co.</span></div>"#,
                r#"</div>"#
            )
            .to_string(),
            Self::Faq => concat!(
                r#"<div class="faq"><h3>Frequently asked questions</h3>"#,
                r#"<div class="faq-item"><div class="faq-question">What does this product offer?</div>"#,
                r#"<div class="faq-answer">It offers the features that make it the right choice for you.</div></div>"#,
                r#"<div class="faq-item"><div class="faq-question">How do I get support?</div>"#,
                r#"<div class="faq-answer">Reach our support team by email or phone.</div></div>"#,
                r#"<div class="faq-item"><div class="faq-question">Is there a warranty?</div>"#,
                r#"<div class="faq-answer">Yes, every product ships with a full one-year warranty.</div></div>"#,
                r#"</div>"#
            )
            .to_string(),
            Self::Contact => concat!(
                r#"<div class="contact"><h3>Contact</h3>"#,
                r#"<div class="contact-grid">"#,
                r#"<div class="contact-item"><h4>Phone</h4><p>+1 555 123 4567</p></div>"#,
                r#"<div class="contact-item"><h4>Email</h4><p>info@example.com</p></div>"#,
                r#"<div class="contact-item"><h4>Address</h4><p>100 Main Street, Springfield</p></div>"#,
                r#"</div></div>"#
            )
            .to_string(),
            Self::Gallery => concat!(
                r#"<div class="gallery"><h3>Gallery</h3>"#,
                r#"<div class="gallery-grid">"#,
                r#"<div class="gallery-tile gallery-tile-1"></div>"#,
                r#"<div class="gallery-tile gallery-tile-2"></div>"#,
                r#"<div class="gallery-tile gallery-tile-3"></div>"#,
                r#"<div class="gallery-tile gallery-tile-4"></div>"#,
                r#"</div></div>"#
            )
            .to_string(),
        }
    }
}

/// Render the named snippet with its default parameters. Unknown names yield
/// the empty string, not an error.
pub fn render_named(name: &str) -> String {
    Snippet::from_name(name)
        .map(|snippet| snippet.render())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_renders_empty() {
        assert_eq!(render_named("carousel"), "");
        assert!(Snippet::from_name("carousel").is_none());
    }

    #[test]
    fn test_every_menu_name_renders_something() {
        for name in NAMES {
            assert!(!render_named(name).is_empty(), "{name} rendered empty");
        }
    }

    #[test]
    fn test_alert_defaults() {
        let html = render_named("alert");
        assert!(html.contains("alert-success"));
        assert!(html.contains("Heads up"));
    }

    #[test]
    fn test_quote_with_source() {
        let html = Snippet::Quote {
            text: "t".to_string(),
            author: "a".to_string(),
            source: Some("s".to_string()),
        }
        .render();
        assert!(html.contains("— a, s"));
    }

    #[test]
    fn test_card_optional_sections() {
        let bare = render_named("card");
        assert!(!bare.contains("card-image"));
        assert!(!bare.contains("card-footer"));

        let full = Snippet::Card {
            title: "t".to_string(),
            body: "b".to_string(),
            image: Some("pic.png".to_string()),
            footer: Some("f".to_string()),
        }
        .render();
        assert!(full.contains(r#"src="pic.png""#));
        assert!(full.contains("card-footer"));
    }
}
