use crate::model::message::Message;

/// Append-only, insertion-ordered record of the dialogue.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<Message>,
}

impl Transcript {
    pub fn push(&mut self, message: Message) {
        self.entries.push(message);
    }

    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<&Message> {
        self.entries.last()
    }

    #[cfg(test)]
    pub fn contains_text(&self, needle: &str) -> bool {
        self.entries.iter().any(|m| m.text().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut transcript = Transcript::default();
        transcript.push(Message::Intent("open the door".into()));
        transcript.push(Message::Narrative("The door creaks.".into()));
        transcript.push(Message::System("Turn failed".into()));

        let texts: Vec<&str> = transcript.entries().iter().map(Message::text).collect();
        assert_eq!(texts, ["open the door", "The door creaks.", "Turn failed"]);
        assert_eq!(transcript.last(), Some(&Message::System("Turn failed".into())));
    }

    #[test]
    fn searches_entry_text() {
        let mut transcript = Transcript::default();
        assert!(transcript.is_empty());

        transcript.push(Message::System("Session started: abc-123".into()));
        assert!(transcript.contains_text("abc-123"));
        assert!(!transcript.contains_text("xyz"));
    }
}
