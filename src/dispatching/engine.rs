//! Rule engine for multi-criteria dispatching.
//!
//! Applies dispatching rules in sequence, consulting the next rule only
//! when the previous one ties, and finishes with a configurable final
//! tie-breaker.

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::ProcessDescriptor;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the original input order (stable sort).
    #[default]
    Stable,
    /// Deterministic by process ID (lexicographic).
    ById,
}

/// A composable rule engine for process ordering.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new().with_rule(rules::Fifo);
/// assert_eq!(engine.rule_names(), vec!["FIFO"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::Stable,
            epsilon: 1e-9,
        }
    }

    /// Appends a rule; later rules only break ties of earlier ones.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts processes by priority (highest priority first).
    ///
    /// Returns indices into the original slice. The sort is stable, so
    /// processes that tie on every rule keep their input order unless the
    /// final tie-breaker is [`TieBreaker::ById`].
    pub fn sort_indices(&self, processes: &[ProcessDescriptor]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    fn compare(&self, a: &ProcessDescriptor, b: &ProcessDescriptor) -> Ordering {
        for rule in &self.rules {
            // Exact keys first: f64 scores lose precision above 2^53.
            if let (Some(key_a), Some(key_b)) = (rule.exact_key(a), rule.exact_key(b)) {
                if key_a != key_b {
                    return key_a.cmp(&key_b);
                }
                continue;
            }

            let score_a = rule.evaluate(a);
            let score_b = rule.evaluate(b);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }

        // All rules tied → use final tie-breaker
        match self.tie_breaker {
            TieBreaker::Stable => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn make_process(id: &str, burst: i64, arrival: i64) -> ProcessDescriptor {
        ProcessDescriptor::new(id, burst).with_arrival_time(arrival)
    }

    #[test]
    fn test_spt_ordering() {
        let processes = vec![
            make_process("long", 8, 0),
            make_process("short", 1, 1),
            make_process("medium", 4, 2),
        ];
        let engine = RuleEngine::new().with_rule(rules::Spt);

        let indices = engine.sort_indices(&processes);
        assert_eq!(processes[indices[0]].id, "short");
        assert_eq!(processes[indices[1]].id, "medium");
        assert_eq!(processes[indices[2]].id, "long");
    }

    #[test]
    fn test_fifo_ordering() {
        let processes = vec![
            make_process("third", 1, 2),
            make_process("first", 9, 0),
            make_process("second", 5, 1),
        ];
        let engine = RuleEngine::new().with_rule(rules::Fifo);

        assert_eq!(engine.sort_indices(&processes), vec![1, 2, 0]);
    }

    #[test]
    fn test_stable_tie_keeps_input_order() {
        let processes = vec![make_process("B", 3, 0), make_process("A", 3, 0)];
        let engine = RuleEngine::new().with_rule(rules::Spt);

        assert_eq!(engine.sort_indices(&processes), vec![0, 1]);
    }

    #[test]
    fn test_by_id_tie_breaker() {
        let processes = vec![make_process("B", 3, 0), make_process("A", 3, 1)];
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_final_tie_breaker(TieBreaker::ById);

        // SPT ties → ById → A before B
        assert_eq!(processes[engine.sort_indices(&processes)[0]].id, "A");
    }

    #[test]
    fn test_secondary_rule_breaks_tie() {
        let processes = vec![make_process("late", 3, 5), make_process("early", 3, 1)];
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_rule(rules::Fifo);

        assert_eq!(processes[engine.sort_indices(&processes)[0]].id, "early");
    }

    #[test]
    fn test_empty_processes() {
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert!(engine.sort_indices(&[]).is_empty());
    }

    #[test]
    fn test_large_bursts_compared_exactly() {
        // 2^53 and 2^53 + 1 are equal as f64
        let big = 1_i64 << 53;
        let processes = vec![make_process("A", big + 1, 0), make_process("B", big, 1)];
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_final_tie_breaker(TieBreaker::ById);

        assert_eq!(engine.sort_indices(&processes), vec![1, 0]);
    }

    #[test]
    fn test_large_arrivals_compared_exactly() {
        let big = 1_i64 << 53;
        let processes = vec![make_process("A", 1, big + 1), make_process("B", 1, big)];
        let engine = RuleEngine::new().with_rule(rules::Fifo);

        assert_eq!(engine.sort_indices(&processes), vec![1, 0]);
    }

    #[test]
    fn test_float_only_rule_still_orders() {
        #[derive(Debug)]
        struct Reverse;
        impl crate::dispatching::DispatchingRule for Reverse {
            fn name(&self) -> &'static str {
                "REV"
            }
            fn evaluate(&self, process: &ProcessDescriptor) -> crate::dispatching::RuleScore {
                -(process.burst_time as f64)
            }
        }

        let processes = vec![make_process("short", 1, 0), make_process("long", 9, 1)];
        let engine = RuleEngine::new().with_rule(Reverse);
        assert_eq!(engine.sort_indices(&processes), vec![1, 0]);
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_final_tie_breaker(TieBreaker::ById);
        let text = format!("{engine:?}");
        assert!(text.contains("SPT"));
        assert!(text.contains("ById"));
    }
}
