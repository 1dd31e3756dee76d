use crate::domain::value_objects::CharacterSequence;
use std::collections::BTreeSet;
use std::fmt;

/// Every distinct ordering of a character sequence, kept sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermutationSet(BTreeSet<String>);

impl PermutationSet {
    /// Enumerates all arrangements of `sequence` by swapping in place.
    ///
    /// Repeated characters produce repeated arrangements; the set keeps one
    /// copy of each. An empty sequence yields an empty set.
    pub fn generate(sequence: &CharacterSequence) -> Self {
        let mut found = BTreeSet::new();
        if !sequence.is_empty() {
            let mut working = sequence.chars().to_vec();
            permute(&mut working, 0, &mut found);
        }
        PermutationSet(found)
    }

    /// Number of distinct arrangements
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for an empty input sequence
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Arrangements in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Comma-joined rendering, or `None` when there is nothing to print
    pub fn output_line(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for PermutationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(item)?;
        }
        Ok(())
    }
}

fn permute(working: &mut [char], left: usize, found: &mut BTreeSet<String>) {
    let right = working.len() - 1;
    if left == right {
        found.insert(working.iter().collect());
        return;
    }
    for i in left..=right {
        working.swap(left, i);
        permute(working, left + 1, found);
        // restore before the next candidate takes position `left`
        working.swap(left, i);
    }
}
