// Factory Method Pattern
// Creators decide which product to build; `create_product` is the fixed template that uses them.

use crate::sink::Sink;

pub trait Product {
    fn create(&self, out: &mut dyn Sink);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProductA;

impl Product for ProductA {
    fn create(&self, out: &mut dyn Sink) {
        out.write("Product A created");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProductB;

impl Product for ProductB {
    fn create(&self, out: &mut dyn Sink) {
        out.write("Product B created");
    }
}

// ============================================================================
// Creators
// ============================================================================

/// The overridable hook: which product a creator builds.
pub trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;
}

/// Template operation over every [`Creator`].
///
/// Provided through a blanket impl, so creators cannot replace it; they only
/// choose the product via [`Creator::factory_method`].
pub trait CreateProduct {
    fn create_product(&self, out: &mut dyn Sink);
}

impl<C: Creator + ?Sized> CreateProduct for C {
    fn create_product(&self, out: &mut dyn Sink) {
        let product = self.factory_method();
        tracing::debug!("product built by factory method");
        product.create(out);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreatorA;

impl Creator for CreatorA {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ProductA)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreatorB;

impl Creator for CreatorB {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ProductB)
    }
}

pub fn demo(out: &mut dyn Sink) {
    let creator_a: Box<dyn Creator> = Box::new(CreatorA);
    creator_a.create_product(out);

    let creator_b: Box<dyn Creator> = Box::new(CreatorB);
    creator_b.create_product(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Transcript;
    use std::cell::Cell;

    struct CountingCreator {
        calls: Cell<usize>,
    }

    impl Creator for CountingCreator {
        fn factory_method(&self) -> Box<dyn Product> {
            self.calls.set(self.calls.get() + 1);
            Box::new(ProductB)
        }
    }

    #[test]
    fn test_creators_never_cross_products() {
        let mut a = Transcript::new();
        let mut b = Transcript::new();

        CreatorA.create_product(&mut a);
        CreatorB.create_product(&mut b);

        assert_eq!(a.lines(), ["Product A created"]);
        assert_eq!(b.lines(), ["Product B created"]);
    }

    #[test]
    fn test_template_calls_hook_once_per_call() {
        let creator = CountingCreator { calls: Cell::new(0) };
        let mut out = Transcript::new();

        creator.create_product(&mut out);
        assert_eq!(creator.calls.get(), 1);
        assert_eq!(out.len(), 1);

        creator.create_product(&mut out);
        assert_eq!(creator.calls.get(), 2);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_new_creator_extends_without_touching_template() {
        let creator: &dyn Creator = &CountingCreator { calls: Cell::new(0) };
        let mut out = Transcript::new();
        creator.create_product(&mut out);
        assert_eq!(out.lines(), ["Product B created"]);
    }

    #[test]
    fn test_demo_scenario() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(out.lines(), ["Product A created", "Product B created"]);
    }
}
