
use std::fmt;

/// Whether the library was sequenced single- or paired-end
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ReadType {
    SingleEnd,
    PairedEnd
}

/// Relative orientation of the two mates; only meaningful for paired-end libraries
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum_macros::AsRefStr)]
pub enum ReadOrientation {
    /// Mates are on the same strand
    #[strum(serialize = "M")]
    SameStrand,
    /// Mates point away from each other
    #[strum(serialize = "O")]
    AwayFromEachOther,
    /// Mates point toward each other, the usual Illumina layout
    #[strum(serialize = "I")]
    TowardEachOther,
    /// Single-end reads have no orientation
    #[strum(serialize = "")]
    None
}

/// Strand-specificity of the protocol, relative to the (first) read
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum_macros::AsRefStr)]
pub enum ReadStrandedness {
    /// The (first) read comes from the transcript strand
    #[strum(serialize = "SF")]
    Forward,
    /// The (first) read comes from the reverse complement of the transcript
    #[strum(serialize = "SR")]
    Reverse,
    #[strum(serialize = "U")]
    Unstranded
}

/// Describes the type of an input library, e.g. "IU" for unstranded, inward-facing paired-end reads.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LibraryFormat {
    read_type: ReadType,
    orientation: ReadOrientation,
    strandedness: ReadStrandedness
}

impl LibraryFormat {
    /// Constructor for a single-end library, which never carries an orientation
    pub fn single_end(strandedness: ReadStrandedness) -> Self {
        Self {
            read_type: ReadType::SingleEnd,
            orientation: ReadOrientation::None,
            strandedness
        }
    }

    /// Constructor for a paired-end library
    /// # Arguments
    /// * `orientation` - mate orientation; `ReadOrientation::None` is treated as inward-facing
    /// * `strandedness` - strand-specificity of the library
    pub fn paired_end(orientation: ReadOrientation, strandedness: ReadStrandedness) -> Self {
        let orientation = match orientation {
            ReadOrientation::None => ReadOrientation::TowardEachOther,
            o => o
        };
        Self {
            read_type: ReadType::PairedEnd,
            orientation,
            strandedness
        }
    }

    // getters
    pub fn read_type(&self) -> ReadType {
        self.read_type
    }

    pub fn orientation(&self) -> ReadOrientation {
        self.orientation
    }

    pub fn strandedness(&self) -> ReadStrandedness {
        self.strandedness
    }
}

impl fmt::Display for LibraryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.orientation.as_ref(), self.strandedness.as_ref())
    }
}
