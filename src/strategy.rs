// Strategy Pattern
// A context holds one boxed strategy and delegates to it; the strategy can be swapped at runtime.

use crate::sink::Sink;

pub trait Strategy {
    fn execute(&self, out: &mut dyn Sink);
    fn name(&self) -> &'static str;
}

// ============================================================================
// Concrete strategies
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct StrategyA;

impl Strategy for StrategyA {
    fn execute(&self, out: &mut dyn Sink) {
        out.write("Executing strategy A");
    }

    fn name(&self) -> &'static str {
        "A"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StrategyB;

impl Strategy for StrategyB {
    fn execute(&self, out: &mut dyn Sink) {
        out.write("Executing strategy B");
    }

    fn name(&self) -> &'static str {
        "B"
    }
}

// ============================================================================
// Context
// ============================================================================

pub struct Context {
    strategy: Box<dyn Strategy>,
}

impl Context {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self { strategy }
    }

    /// Replaces the current strategy. Takes effect on the next `execute_strategy`.
    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        tracing::debug!(from = self.strategy.name(), to = strategy.name(), "strategy swapped");
        self.strategy = strategy;
    }

    pub fn execute_strategy(&self, out: &mut dyn Sink) {
        self.strategy.execute(out);
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

pub fn demo(out: &mut dyn Sink) {
    let mut context = Context::new(Box::new(StrategyA));
    context.execute_strategy(out);

    context.set_strategy(Box::new(StrategyB));
    context.execute_strategy(out);
}
