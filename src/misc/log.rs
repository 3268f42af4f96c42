/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::parse)
    pub const PARSE: &str = "parse";

    /// Logs related to the [knowledge base](crate::db::knowledge)
    pub const KNOWLEDGE_BASE: &str = "knowledge_base";

    /// Logs related to [normalisation](crate::cnf)
    pub const CNF: &str = "cnf";

    /// Logs related to [truth tables](crate::procedures::truth_table)
    pub const TRUTH_TABLE: &str = "truth_table";

    /// Logs related to [forward](crate::procedures::forward) and [backward](crate::procedures::backward) chaining
    pub const CHAINING: &str = "chaining";

    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [DPLL](crate::procedures::dpll)
    pub const DPLL: &str = "dpll";
}
