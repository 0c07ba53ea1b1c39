//! Label list editing helpers.
//!
//! # Design
//! - Labels loaded from a torrent are kept exactly as decoded, so an untouched
//!   editor writes back what the daemon sent.
//! - New entries are trimmed; blanks and duplicates are ignored.
//! - Keep insertion order.

use transdeck_torrent_core::{Label, encode};

/// Ordered label list being edited.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LabelEditor {
    labels: Vec<Label>,
}

impl LabelEditor {
    /// Start from an existing decoded label set.
    #[must_use]
    pub const fn new(labels: Vec<Label>) -> Self {
        Self { labels }
    }

    /// Add `text` when it is non-blank and not already present.
    ///
    /// Returns whether a label was added.
    pub fn add(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.labels.iter().any(|label| label.text == trimmed) {
            return false;
        }
        self.labels.push(Label::new(trimmed));
        true
    }

    /// Remove the label at `index`; out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) -> Option<Label> {
        (index < self.labels.len()).then(|| self.labels.remove(index))
    }

    /// Current labels in display order.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels encoded for the daemon.
    #[must_use]
    pub fn encoded(&self) -> Vec<String> {
        self.labels.iter().map(encode).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transdeck_torrent_core::decode;

    #[test]
    fn add_trims_and_skips_blanks_and_duplicates() {
        let mut editor = LabelEditor::default();
        assert!(editor.add("  linux "));
        assert!(!editor.add("linux"));
        assert!(!editor.add("   "));
        assert!(editor.add("iso"));
        let texts: Vec<_> = editor.labels().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["linux", "iso"]);
    }

    #[test]
    fn loaded_labels_are_kept_verbatim() {
        let loaded = vec![
            Label::new(" padded "),
            Label::new("dup"),
            Label::new("dup"),
            Label::new(""),
        ];
        let mut editor = LabelEditor::new(loaded.clone());
        assert_eq!(editor.labels(), loaded.as_slice());
        assert!(!editor.add("dup"));
        assert!(editor.add(" padded "));
        assert_eq!(editor.labels().last(), Some(&Label::new("padded")));
    }

    #[test]
    fn remove_ignores_out_of_range() {
        let mut editor = LabelEditor::new(vec![Label::new("a"), Label::new("b")]);
        assert_eq!(editor.remove(5), None);
        assert_eq!(editor.remove(0), Some(Label::new("a")));
        assert_eq!(editor.labels(), &[Label::new("b")]);
    }

    #[test]
    fn encoded_labels_decode_back() {
        let editor = LabelEditor::new(vec![Label::new("say \"hi\"")]);
        let encoded = editor.encoded();
        assert_eq!(decode(&encoded[0]), Some(Label::new("say \"hi\"")));
    }
}
