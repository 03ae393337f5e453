//! FAQ accordion rendering for the landing page.
//!
//! FAQs come from the `/api/faqs` endpoint as `{"faqs": [...]}`. Questions are
//! plain text; answers support the inline markup subset.

use std::fmt::Write;

use crate::escape::escape_html;
use crate::renderer::InlineRenderer;

/// Default accordion element id.
pub const DEFAULT_ACCORDION_ID: &str = "faqAccordion";

const EMPTY_PLACEHOLDER: &str = r#"<div class="d-flex justify-content-center align-items-center py-5"><p class="text-muted">No FAQs available yet.</p></div>"#;

/// A single question and answer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Faq {
    pub question: String,
    /// Answer text with inline markup. Missing answers render empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub answer: Option<String>,
}

/// Response body of the FAQ listing endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaqList {
    #[cfg_attr(feature = "serde", serde(default))]
    pub faqs: Vec<Faq>,
}

/// Renders FAQs as a Bootstrap accordion.
pub struct FaqAccordion {
    id: String,
    first_expanded: bool,
    renderer: InlineRenderer,
}

impl Default for FaqAccordion {
    fn default() -> Self {
        Self::new(DEFAULT_ACCORDION_ID)
    }
}

impl FaqAccordion {
    /// Create an accordion with the given element id. The first item starts expanded.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_expanded: true,
            renderer: InlineRenderer::new(),
        }
    }

    /// Whether the first item starts expanded.
    #[must_use]
    pub fn with_first_expanded(mut self, expanded: bool) -> Self {
        self.first_expanded = expanded;
        self
    }

    /// Use a configured renderer for answers.
    #[must_use]
    pub fn with_renderer(mut self, renderer: InlineRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Render all FAQs, or a placeholder when there are none.
    #[must_use]
    pub fn render(&self, faqs: &[Faq]) -> String {
        if faqs.is_empty() {
            return EMPTY_PLACEHOLDER.to_owned();
        }

        let parent = escape_html(&self.id);
        let mut out = String::with_capacity(faqs.len() * 512);
        for (index, faq) in faqs.iter().enumerate() {
            self.render_item(index, faq, &parent, &mut out);
        }
        out
    }

    fn render_item(&self, index: usize, faq: &Faq, parent: &str, out: &mut String) {
        let expanded = self.first_expanded && index == 0;
        let (button_class, aria_expanded, collapse_class) = if expanded {
            ("", "true", " show")
        } else {
            (" collapsed", "false", "")
        };

        write!(
            out,
            r##"<div class="accordion-item shadow border-0 rounded-3 mb-3 overflow-hidden"><h2 class="accordion-header" id="heading{index}"><button class="accordion-button{button_class} fw-semibold" type="button" data-bs-toggle="collapse" data-bs-target="#collapse{index}" aria-expanded="{aria_expanded}" aria-controls="collapse{index}">{question}</button></h2>"##,
            question = escape_html(&faq.question),
        )
        .unwrap();
        write!(
            out,
            r##"<div id="collapse{index}" class="accordion-collapse collapse{collapse_class}" aria-labelledby="heading{index}" data-bs-parent="#{parent}"><div class="accordion-body text-muted">{answer}</div></div></div>"##,
            answer = self.renderer.render_optional(faq.answer.as_deref()),
        )
        .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn faq(question: &str, answer: &str) -> Faq {
        Faq {
            question: question.to_owned(),
            answer: Some(answer.to_owned()),
        }
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        let html = FaqAccordion::default().render(&[]);
        assert!(html.contains("No FAQs available yet."));
        assert!(!html.contains("accordion-item"));
    }

    #[test]
    fn test_single_item() {
        let html = FaqAccordion::default().render(&[faq("What is it?", "A **program**.")]);
        assert_eq!(
            html,
            concat!(
                r#"<div class="accordion-item shadow border-0 rounded-3 mb-3 overflow-hidden">"#,
                r#"<h2 class="accordion-header" id="heading0">"#,
                r##"<button class="accordion-button fw-semibold" type="button" data-bs-toggle="collapse" data-bs-target="#collapse0" aria-expanded="true" aria-controls="collapse0">What is it?</button></h2>"##,
                r##"<div id="collapse0" class="accordion-collapse collapse show" aria-labelledby="heading0" data-bs-parent="#faqAccordion">"##,
                r#"<div class="accordion-body text-muted">A <strong>program</strong>.</div></div></div>"#,
            )
        );
    }

    #[test]
    fn test_only_first_item_expanded() {
        let html = FaqAccordion::default().render(&[faq("a", "1"), faq("b", "2")]);
        assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 1);
        assert_eq!(html.matches(r#"aria-expanded="false""#).count(), 1);
        assert!(html.contains(r#"class="accordion-button collapsed fw-semibold""#));
        assert!(html.contains(r#"id="heading1""#));
        assert!(html.contains(r#"class="accordion-collapse collapse""#));
    }

    #[test]
    fn test_all_collapsed() {
        let html = FaqAccordion::default()
            .with_first_expanded(false)
            .render(&[faq("a", "1")]);
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains(" show"));
    }

    #[test]
    fn test_question_is_escaped_without_markup() {
        let html = FaqAccordion::default().render(&[faq("<b>**Why?**</b>", "")]);
        assert!(html.contains("&lt;b&gt;**Why?**&lt;/b&gt;"));
    }

    #[test]
    fn test_answer_links_are_sanitized() {
        let html = FaqAccordion::default().render(&[faq(
            "Where?",
            "[site](https://hackclub.com) [bad](javascript:void(0))",
        )]);
        assert!(html.contains(r#"<a href="https://hackclub.com" target="_blank""#));
        assert!(html.contains("[bad](javascript:void(0))"));
    }

    #[test]
    fn test_missing_answer_renders_empty_body() {
        let item = Faq {
            question: "q".to_owned(),
            answer: None,
        };
        let html = FaqAccordion::default().render(&[item]);
        assert!(html.contains(r#"<div class="accordion-body text-muted"></div>"#));
    }

    #[test]
    fn test_accordion_id_is_escaped() {
        let html = FaqAccordion::new(r#"x"y"#).render(&[faq("q", "a")]);
        assert!(html.contains(r##"data-bs-parent="#x&quot;y""##));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_faq_list() {
        let json = r#"{"faqs": [{"question": "Q1", "answer": "A1"}, {"question": "Q2", "answer": null}, {"question": "Q3"}]}"#;
        let list: FaqList = serde_json::from_str(json).unwrap();
        assert_eq!(list.faqs.len(), 3);
        assert_eq!(list.faqs[0], faq("Q1", "A1"));
        assert_eq!(list.faqs[1].answer, None);
        assert_eq!(list.faqs[2].answer, None);
    }
}
