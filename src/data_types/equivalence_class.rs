
/// A group of transcripts that a set of fragments is ambiguously compatible with, and how many fragments that is.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EquivalenceClass {
    /// Transcript ids in the group, in the group's native order; non-empty and distinct
    pub transcripts: Vec<u32>,
    /// Number of fragments assigned to this group
    pub count: u64,
}

impl EquivalenceClass {
    /// Constructor
    pub fn new(transcripts: Vec<u32>, count: u64) -> Self {
        Self {
            transcripts,
            count
        }
    }

    /// Number of transcripts in the group
    pub fn len(&self) -> usize {
        self.transcripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty()
    }
}
