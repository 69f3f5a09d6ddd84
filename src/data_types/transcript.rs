
/// A reference transcript along with the abundance state the quantification engine assigned to it.
/// The position of a transcript in the experiment is its transcript id in the equivalence classes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    /// The reference name, written verbatim into every output
    pub ref_name: String,
    /// Length of the reference sequence
    pub ref_length: u32,
    /// Length adjusted for the fragment length distribution; TPM denominator
    pub effective_length: f64,
    /// Estimated fraction of the mapped fragments, without any prior mass
    mass: f64,
    /// Fragments assigned to this transcript by the online phase
    shared_count: f64,
    /// Reported read count; populated when the abundances are written
    pub projected_counts: f64,
}

impl Transcript {
    /// Constructor
    /// # Arguments
    /// * `ref_name` - name of the reference sequence
    /// * `ref_length` - length of the reference sequence
    /// * `effective_length` - the effective length of the transcript
    /// * `mass` - the estimated abundance fraction (prior-free)
    /// * `shared_count` - the count of fragments shared with this transcript
    pub fn new(ref_name: String, ref_length: u32, effective_length: f64, mass: f64, shared_count: f64) -> Self {
        Self {
            ref_name,
            ref_length,
            effective_length,
            mass,
            shared_count,
            projected_counts: 0.0
        }
    }

    // getters
    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn shared_count(&self) -> f64 {
        self.shared_count
    }
}
