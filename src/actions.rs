use crossbeam_channel::{unbounded, Receiver, Sender};

/// Window-level operations reachable from the menu and toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NewProject,
    OpenProject,
    SaveProject,
    ToggleGrid,
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

/// A labelled entry with a registered zero-argument handler, invoked
/// synchronously on the UI thread when its menu item or toolbar button is
/// clicked.
pub struct Action {
    pub label: &'static str,
    handler: Box<dyn Fn()>,
}

impl Action {
    pub fn new(label: &'static str, handler: impl Fn() + 'static) -> Self {
        Self {
            label,
            handler: Box::new(handler),
        }
    }

    pub fn trigger(&self) {
        (self.handler)();
    }
}

/// The window's registered actions plus the channel their stock handlers
/// report on. Registration order is presentation order.
pub struct ActionSet {
    tx: Sender<Command>,
    rx: Receiver<Command>,
    pub file: Vec<Action>,
    pub view: Vec<Action>,
    pub grid_toggle: Action,
}

impl ActionSet {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();

        let file = vec![
            command_action(&tx, "New", Command::NewProject),
            command_action(&tx, "Open", Command::OpenProject),
            command_action(&tx, "Save", Command::SaveProject),
        ];
        let view = vec![
            command_action(&tx, "Zoom In", Command::ZoomIn),
            command_action(&tx, "Zoom Out", Command::ZoomOut),
            command_action(&tx, "Reset Zoom", Command::ResetZoom),
        ];
        let grid_toggle = command_action(&tx, "Show Grid", Command::ToggleGrid);

        Self {
            tx,
            rx,
            file,
            view,
            grid_toggle,
        }
    }

    /// The next pending command, if any. The window drains these once per
    /// frame, on the same thread the handlers run on.
    pub fn poll(&self) -> Option<Command> {
        self.rx.try_recv().ok()
    }

    /// Sender for handlers registered outside the stock set.
    pub fn sender(&self) -> Sender<Command> {
        self.tx.clone()
    }
}

/// An action whose handler sends `command` when triggered. The UI thread is
/// the only sender, and the channel is unbounded, so a send never blocks.
fn command_action(tx: &Sender<Command>, label: &'static str, command: Command) -> Action {
    let tx = tx.clone();
    Action::new(label, move || {
        let _ = tx.send(command);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggering_sends_the_registered_command() {
        let actions = ActionSet::new();
        actions.file[0].trigger();
        assert_eq!(actions.poll(), Some(Command::NewProject));
        assert_eq!(actions.poll(), None);
    }

    #[test]
    fn commands_arrive_in_trigger_order() {
        let actions = ActionSet::new();
        actions.file[2].trigger();
        actions.file[1].trigger();
        actions.grid_toggle.trigger();
        assert_eq!(actions.poll(), Some(Command::SaveProject));
        assert_eq!(actions.poll(), Some(Command::OpenProject));
        assert_eq!(actions.poll(), Some(Command::ToggleGrid));
        assert_eq!(actions.poll(), None);
    }

    #[test]
    fn registration_order_is_presentation_order() {
        let actions = ActionSet::new();
        let labels: Vec<_> = actions.file.iter().map(|a| a.label).collect();
        assert_eq!(labels, ["New", "Open", "Save"]);
    }

    #[test]
    fn external_handlers_share_the_channel() {
        let actions = ActionSet::new();
        let tx = actions.sender();
        let custom = Action::new("Zoom In", move || {
            let _ = tx.send(Command::ZoomIn);
        });
        custom.trigger();
        assert_eq!(actions.poll(), Some(Command::ZoomIn));
    }
}
