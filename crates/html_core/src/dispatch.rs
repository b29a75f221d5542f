use crate::command::{Command, CommandDescriptor, CommandKind};
use crate::engine::EditingEngine;

/// Sends one command to the engine.
///
/// Built-in actions go to the engine's own action table; everything else is
/// run as a named editing command. Neither raises a selection notification,
/// so the caller refreshes the toolbar afterwards.
pub fn dispatch<E: EditingEngine + ?Sized>(engine: &mut E, command: &Command) -> Dispatched {
    let descriptor = command.descriptor();
    match descriptor.kind {
        CommandKind::BuiltinAction(action) => engine.trigger_action(action),
        CommandKind::Script => engine.exec_command(descriptor.name, descriptor.argument.as_ref()),
    }
    log::debug!("dispatched {} ({:?})", descriptor.name, descriptor.kind);
    Dispatched { descriptor }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched {
    pub descriptor: CommandDescriptor,
}
