/// How [DPLL](crate::procedures::dpll) chooses a symbol to branch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SymbolChoice {
    /// The first unassigned symbol, in the order symbols were first read.
    First,

    /// Some unassigned symbol, chosen by the seeded source of randomness.
    Random,
}

impl SymbolChoice {
    pub const MIN: SymbolChoice = SymbolChoice::First;
    pub const MAX: SymbolChoice = SymbolChoice::Random;
}

impl std::fmt::Display for SymbolChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Random => write!(f, "random"),
        }
    }
}
