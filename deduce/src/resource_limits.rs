/// Resource limits to keep parsing, enumeration and search predictable
///
/// These limits protect against pathological inputs while being generous
/// enough for anything a person would type or prove by hand.
#[derive(Debug, Clone)]
pub struct ResourceLimits {
    /// Maximum formula length in non-whitespace characters
    /// Real usage: ~30 chars, Limit: 1024
    pub max_formula_length: usize,

    /// Maximum nesting depth (parenthesized groups, stacked negations,
    /// chained implications)
    /// Real usage: ~4 levels, Limit: 100
    pub max_expression_depth: usize,

    /// Maximum number of distinct propositions a truth table may enumerate
    /// 16 propositions = 65536 rows
    pub max_table_propositions: usize,

    /// Default step budget for automatic proof search
    pub max_search_steps: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_formula_length: 1024,
            max_expression_depth: 100,
            max_table_propositions: 16,
            max_search_steps: 50,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_steps(mut self, max_search_steps: usize) -> Self {
        self.max_search_steps = max_search_steps;
        self
    }
}
