// State Pattern
// The context forwards each request to whichever state it currently holds.

use crate::sink::Sink;

pub trait State {
    fn handle_request(&self, out: &mut dyn Sink);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StateA;

impl State for StateA {
    fn handle_request(&self, out: &mut dyn Sink) {
        out.write("Handling request in State A");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StateB;

impl State for StateB {
    fn handle_request(&self, out: &mut dyn Sink) {
        out.write("Handling request in State B");
    }
}

pub struct Context {
    current: Box<dyn State>,
}

impl Context {
    pub fn new(initial: Box<dyn State>) -> Self {
        Self { current: initial }
    }

    pub fn set_state(&mut self, state: Box<dyn State>) {
        tracing::debug!("state transition");
        self.current = state;
    }

    pub fn request(&self, out: &mut dyn Sink) {
        self.current.handle_request(out);
    }
}

pub fn demo(out: &mut dyn Sink) {
    let mut context = Context::new(Box::new(StateA));
    context.request(out);

    context.set_state(Box::new(StateB));
    context.request(out);
}
