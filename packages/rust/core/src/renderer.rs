//! Response renderer.
//!
//! Turns a topic id into the final help-desk answer. Every call produces
//! text: unknown topics get a clarification request, topics that need
//! details get their details prompt, everything else gets the full answer
//! with numbered steps, fenced commands and an optional escalation note.

use tracing::{debug, instrument};

use schooldesk_knowledge::KnowledgeStore;
use schooldesk_shared::DEFAULT_GREETING;

use crate::entry::NormalizedEntry;

/// Clarification shown for topics missing from the knowledge store.
pub const UNKNOWN_TOPIC_PROMPT: &str = "Уточните, пожалуйста, что именно требуется, кабинет и номер компьютера — помогу оформить заявку.";

/// Placeholder in step templates replaced with the caller's details.
const DETAILS_PLACEHOLDER: &str = "{details}";

/// Code fence wrapped around each command.
const CODE_FENCE: &str = "```";

/// Formats canned answers from a borrowed knowledge store.
#[derive(Debug, Clone)]
pub struct ResponseRenderer<'a, S> {
    store: &'a S,
    greeting: String,
}

impl<'a, S: KnowledgeStore> ResponseRenderer<'a, S> {
    /// Create a renderer with the default greeting.
    pub fn new(store: &'a S) -> Self {
        Self::with_greeting(store, DEFAULT_GREETING)
    }

    /// Create a renderer with a custom greeting line.
    pub fn with_greeting(store: &'a S, greeting: impl Into<String>) -> Self {
        Self {
            store,
            greeting: greeting.into(),
        }
    }

    /// The greeting that starts every response.
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// All topic ids in store order.
    pub fn available_topics(&self) -> Vec<String> {
        self.store
            .entries()
            .map(|(id, _)| id.to_string())
            .collect()
    }

    /// Topic ids paired with their titles; the id doubles as the title when
    /// the topic has none.
    pub fn topics_with_titles(&self) -> Vec<(String, String)> {
        self.store
            .entries()
            .map(|(id, raw)| {
                let title = raw.title.as_deref().unwrap_or(id);
                (id.to_string(), title.to_string())
            })
            .collect()
    }

    /// Render the answer for `topic`.
    ///
    /// `details` is substituted for `{details}` in step templates and
    /// satisfies topics that need details. An empty string counts as no
    /// details. `include_escalation` controls the trailing escalation note.
    #[instrument(skip(self, details), fields(has_details = details.is_some_and(|d| !d.is_empty())))]
    pub fn render(&self, topic: &str, details: Option<&str>, include_escalation: bool) -> String {
        let Some(raw) = self.store.get(topic) else {
            debug!("unknown topic, asking for clarification");
            return self.render_unknown();
        };

        let entry = NormalizedEntry::normalize(raw);
        let details = details.filter(|d| !d.is_empty());

        if entry.needs_details && details.is_none() {
            debug!("topic needs details, requesting them");
            return self.render_details_request(&entry);
        }

        debug!(
            steps = entry.steps.len(),
            commands = entry.commands.len(),
            "rendering full response"
        );
        self.render_entry(&entry, details, include_escalation)
    }

    // -----------------------------------------------------------------------
    // Response shapes
    // -----------------------------------------------------------------------

    fn render_entry(
        &self,
        entry: &NormalizedEntry,
        details: Option<&str>,
        include_escalation: bool,
    ) -> String {
        let mut lines: Vec<String> = vec![self.greeting.clone(), String::new()];

        for (index, template) in entry.steps.iter().enumerate() {
            let step = fill_details(template, details.unwrap_or_default());
            lines.push(format!("{}. {step}", index + 1));
        }

        for command in &entry.commands {
            lines.extend([
                String::new(),
                CODE_FENCE.to_string(),
                command.clone(),
                CODE_FENCE.to_string(),
            ]);
        }

        if include_escalation {
            if let Some(text) = &entry.escalate_text {
                lines.extend([String::new(), text.clone()]);
            }
        }

        lines.join("\n")
    }

    fn render_unknown(&self) -> String {
        self.numbered_prompt(UNKNOWN_TOPIC_PROMPT)
    }

    fn render_details_request(&self, entry: &NormalizedEntry) -> String {
        self.numbered_prompt(&entry.details_prompt)
    }

    fn numbered_prompt(&self, prompt: &str) -> String {
        format!("{}\n\n1. {prompt}", self.greeting)
    }
}

/// Replace every `{details}` in a step template. Other brace tokens are
/// left untouched.
fn fill_details(template: &str, details: &str) -> String {
    template.replace(DETAILS_PLACEHOLDER, details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schooldesk_knowledge::KnowledgeBase;
    use schooldesk_shared::RawTopicData;

    use crate::entry::DEFAULT_DETAILS_PROMPT;

    fn steps(items: &[&str]) -> Option<Vec<Option<String>>> {
        Some(items.iter().map(|s| Some(s.to_string())).collect())
    }

    fn make_store() -> KnowledgeBase {
        KnowledgeBase::from_topics([
            (
                "printer_connection",
                RawTopicData {
                    title: Some("Принтер".into()),
                    steps: steps(&["Step one", "Step two"]),
                    needs_details: Some(false),
                    ..Default::default()
                },
            ),
            (
                "wifi",
                RawTopicData {
                    title: Some("Wi-Fi".into()),
                    steps: steps(&["Включите Wi-Fi."]),
                    commands: Some(vec![
                        "netsh wlan show interfaces".into(),
                        "ipconfig /all".into(),
                    ]),
                    escalate_text: Some("Оформите заявку.".into()),
                    ..Default::default()
                },
            ),
            (
                "tech_request",
                RawTopicData {
                    steps: steps(&["Заявка: {details}."]),
                    commands: Some(vec!["hostname".into()]),
                    escalate_text: Some("Номер заявки придёт на почту.".into()),
                    needs_details: Some(true),
                    details_prompt: Some("Опишите, пожалуйста, проблему.".into()),
                    ..Default::default()
                },
            ),
            (
                "default_prompt",
                RawTopicData {
                    needs_details: Some(true),
                    ..Default::default()
                },
            ),
            ("untitled", RawTopicData::default()),
        ])
    }

    #[test]
    fn full_response_numbers_steps() {
        let store = make_store();
        let renderer = ResponseRenderer::new(&store);
        let response = renderer.render("printer_connection", None, true);
        assert!(response.starts_with("Здравствуйте!\n\n1. Step one\n2. Step two"));
        assert!(!response.ends_with('\n'));
    }

    #[test]
    fn commands_are_fenced_in_order() {
        let store = make_store();
        let renderer = ResponseRenderer::new(&store);
        let response = renderer.render("wifi", None, true);

        assert!(response.contains("```\nnetsh wlan show interfaces\n```"));
        let first = response.find("netsh wlan show interfaces").unwrap();
        let second = response.find("ipconfig /all").unwrap();
        assert!(first < second);
    }

    #[test]
    fn full_response_layout() {
        let store = make_store();
        let renderer = ResponseRenderer::new(&store);
        let response = renderer.render("wifi", None, true);
        let expected = [
            "Здравствуйте!",
            "",
            "1. Включите Wi-Fi.",
            "",
            "```",
            "netsh wlan show interfaces",
            "```",
            "",
            "```",
            "ipconfig /all",
            "```",
            "",
            "Оформите заявку.",
        ]
        .join("\n");
        assert_eq!(response, expected);
    }

    #[test]
    fn escalation_can_be_suppressed() {
        let store = make_store();
        let renderer = ResponseRenderer::new(&store);
        let response = renderer.render("wifi", None, false);
        assert!(!response.contains("Оформите заявку."));
        assert!(response.ends_with("```"));
    }

    #[test]
    fn missing_escalation_is_silently_omitted() {
        let store = make_store();
        let renderer = ResponseRenderer::new(&store);
        let response = renderer.render("printer_connection", None, true);
        assert_eq!(response, "Здравствуйте!\n\n1. Step one\n2. Step two");
    }

    #[test]
    fn unknown_topic_asks_for_clarification() {
        let store = make_store();
        let renderer = ResponseRenderer::new(&store);
        let response = renderer.render("unknown_topic", Some("каб. 12"), true);
        let lines: Vec<&str> = response.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Здравствуйте!");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("1. "));
        assert!(lines[2].contains("Уточните, пожалуйста"));
    }

    #[test]
    fn missing_details_short_circuit() {
        let store = make_store();
        let renderer = ResponseRenderer::new(&store);

        for details in [None, Some("")] {
            let response = renderer.render("tech_request", details, true);
            assert_eq!(response, "Здравствуйте!\n\n1. Опишите, пожалуйста, проблему.");
            assert!(!response.contains("hostname"));
            assert!(!response.contains("Номер заявки"));
        }
    }

    #[test]
    fn default_details_prompt_is_used() {
        let store = make_store();
        let renderer = ResponseRenderer::new(&store);
        let response = renderer.render("default_prompt", None, true);
        assert_eq!(response.lines().nth(2), Some(format!("1. {DEFAULT_DETAILS_PROMPT}").as_str()));
    }

    #[test]
    fn details_fill_placeholders_and_unlock_full_answer() {
        let store = make_store();
        let renderer = ResponseRenderer::new(&store);
        let response = renderer.render("tech_request", Some("кабинет 204, ПК 3"), true);

        assert!(response.contains("1. Заявка: кабинет 204, ПК 3."));
        assert!(response.contains("```\nhostname\n```"));
        assert!(response.ends_with("Номер заявки придёт на почту."));
    }

    #[test]
    fn placeholder_without_details_becomes_empty() {
        let store = KnowledgeBase::from_topics([(
            "note",
            RawTopicData {
                steps: steps(&["Кабинет: {details}!"]),
                ..Default::default()
            },
        )]);
        let renderer = ResponseRenderer::new(&store);
        assert_eq!(renderer.render("note", None, true), "Здравствуйте!\n\n1. Кабинет: !");
    }

    #[test]
    fn unknown_placeholders_stay_literal() {
        assert_eq!(fill_details("{room}: {details}", "12"), "{room}: 12");
        assert_eq!(fill_details("{details} и {details}", "x"), "x и x");
    }

    #[test]
    fn custom_greeting() {
        let store = make_store();
        let renderer = ResponseRenderer::with_greeting(&store, "Добрый день!");
        assert_eq!(renderer.greeting(), "Добрый день!");
        assert!(renderer.render("nope", None, true).starts_with("Добрый день!\n\n1. "));
    }

    #[test]
    fn available_topics_match_store_order() {
        let store = make_store();
        let renderer = ResponseRenderer::new(&store);
        assert_eq!(
            renderer.available_topics(),
            vec!["printer_connection", "wifi", "tech_request", "default_prompt", "untitled"]
        );
    }

    #[test]
    fn titles_fall_back_to_topic_id() {
        let store = make_store();
        let renderer = ResponseRenderer::new(&store);
        let titles = renderer.topics_with_titles();
        assert_eq!(titles[0], ("printer_connection".to_string(), "Принтер".to_string()));
        assert_eq!(titles[4], ("untitled".to_string(), "untitled".to_string()));
    }

    #[test]
    fn rendering_is_idempotent() {
        let store = make_store();
        let renderer = ResponseRenderer::new(&store);
        for topic in ["printer_connection", "wifi", "tech_request", "missing"] {
            assert_eq!(
                renderer.render(topic, Some("каб. 5"), true),
                renderer.render(topic, Some("каб. 5"), true)
            );
        }
    }

    #[test]
    fn builtin_topics_render() {
        let store = KnowledgeBase::builtin().expect("built-in topics");
        let renderer = ResponseRenderer::new(&store);

        let printer = renderer.render("printer_connection", None, true);
        let lines: Vec<&str> = printer.lines().collect();
        assert_eq!(lines[0], "Здравствуйте!");
        assert!(lines.iter().any(|l| l.starts_with("1.")));
        assert!(lines.iter().any(|l| l.starts_with("2.")));

        let wifi = renderer.render("wifi", None, true);
        assert!(wifi.contains("```\nnetsh wlan show interfaces\n```"));

        let tech = renderer.render("tech_request", None, true);
        assert!(tech.contains("Опишите, пожалуйста"));
    }
}
