/// Counts for various things which count, roughly.
///
/// Counts are kept across calls to `solve`, and each procedure only counts what is relevant to the procedure.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of full valuations examined by a truth table.
    pub valuations: usize,

    /// A count of models found by a truth table.
    pub models: usize,

    /// A count of atoms inferred while chaining.
    pub inferred: usize,

    /// A count of pairs of clauses resolved.
    pub pairs: usize,

    /// A count of fresh resolvents kept.
    pub resolvents: usize,

    /// A count of resolvents discarded as tautologies.
    pub tautologies: usize,

    /// A count of unit propagations.
    pub propagations: usize,

    /// A count of branches made.
    pub branches: usize,

    /// A count of failed branches.
    pub backtracks: usize,
}
