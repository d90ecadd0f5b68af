use std::collections::HashMap;

/// Character frequencies in first-appearance order.
///
/// Iteration order is part of the codec contract: the serialized key keeps
/// this order, and tree construction breaks frequency ties by it, so two
/// processes fed the same key build identical trees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(char, u64)>,
    index: HashMap<char, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every character of `text`. Empty text yields an empty table.
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        for ch in text.chars() {
            table.bump(ch);
        }
        table
    }

    fn bump(&mut self, ch: char) {
        match self.index.get(&ch) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(ch, self.entries.len());
                self.entries.push((ch, 1));
            }
        }
    }

    /// Sets the count for `ch`, appending it if unseen. Used when a table is
    /// rebuilt from a deserialized key.
    pub fn insert(&mut self, ch: char, count: u64) {
        match self.index.get(&ch) {
            Some(&i) => self.entries[i].1 = count,
            None => {
                self.index.insert(ch, self.entries.len());
                self.entries.push((ch, count));
            }
        }
    }

    pub fn get(&self, ch: char) -> Option<u64> {
        self.index.get(&ch).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total character count of the text that produced this table.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, n)| n).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.entries.iter().copied()
    }
}
