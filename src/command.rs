// Command Pattern
// Commands wrap a request against a receiver (`Light`); the remote only knows the `Command` trait.

use crate::sink::Sink;

pub trait Command {
    fn execute(&self, out: &mut dyn Sink);
}

// ============================================================================
// Receiver
// ============================================================================

#[derive(Debug, Default)]
pub struct Light;

impl Light {
    pub fn new() -> Self {
        Light
    }

    pub fn turn_on(&self, out: &mut dyn Sink) {
        out.write("Light is ON");
    }

    pub fn turn_off(&self, out: &mut dyn Sink) {
        out.write("Light is OFF");
    }
}

// ============================================================================
// Concrete commands
// ============================================================================

pub struct LightOnCommand<'a> {
    light: &'a Light,
}

impl<'a> LightOnCommand<'a> {
    pub fn new(light: &'a Light) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand<'_> {
    fn execute(&self, out: &mut dyn Sink) {
        self.light.turn_on(out);
    }
}

pub struct LightOffCommand<'a> {
    light: &'a Light,
}

impl<'a> LightOffCommand<'a> {
    pub fn new(light: &'a Light) -> Self {
        Self { light }
    }
}

impl Command for LightOffCommand<'_> {
    fn execute(&self, out: &mut dyn Sink) {
        self.light.turn_off(out);
    }
}

// ============================================================================
// Invoker
// ============================================================================

/// Always bound to a command; rebinding is the only mutation.
pub struct RemoteControl<'a> {
    command: &'a dyn Command,
}

impl<'a> RemoteControl<'a> {
    pub fn new(command: &'a dyn Command) -> Self {
        Self { command }
    }

    pub fn set_command(&mut self, command: &'a dyn Command) {
        tracing::debug!("remote rebound");
        self.command = command;
    }

    pub fn press_button(&self, out: &mut dyn Sink) {
        self.command.execute(out);
    }
}

pub fn demo(out: &mut dyn Sink) {
    let light = Light::new();

    let light_on = LightOnCommand::new(&light);
    let light_off = LightOffCommand::new(&light);

    let mut remote = RemoteControl::new(&light_on);
    remote.press_button(out);

    remote.set_command(&light_off);
    remote.press_button(out);
}
