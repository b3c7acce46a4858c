use std::time::{Duration, Instant};

/// How long a transient message stays up before the bar reverts to the
/// idle text.
pub const MESSAGE_TTL: Duration = Duration::from_millis(1500);

const IDLE_TEXT: &str = "Ready";

/// Bottom status line: an idle text plus at most one transient message.
///
/// Time is injected so expiry is testable without sleeping.
pub struct StatusBar {
    transient: Option<(String, Instant)>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self { transient: None }
    }

    /// Replaces the current transient message; it expires `MESSAGE_TTL`
    /// after `now`.
    pub fn post(&mut self, text: impl Into<String>, now: Instant) {
        self.transient = Some((text.into(), now + MESSAGE_TTL));
    }

    /// The line to display, dropping an expired transient first.
    pub fn text(&mut self, now: Instant) -> &str {
        if let Some((_, deadline)) = &self.transient {
            if now >= *deadline {
                self.transient = None;
            }
        }
        self.transient
            .as_ref()
            .map(|(text, _)| text.as_str())
            .unwrap_or(IDLE_TEXT)
    }

    /// Time until the live transient expires, if one is up.
    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        self.transient
            .as_ref()
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if let Some(left) = self.time_left(now) {
            // Wake up again when the message lapses back to the idle text.
            ctx.request_repaint_after(left);
        }
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.text(now));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let mut bar = StatusBar::new();
        assert_eq!(bar.text(Instant::now()), "Ready");
    }

    #[test]
    fn transient_message_expires_back_to_idle() {
        let mut bar = StatusBar::new();
        let t0 = Instant::now();

        bar.post("Open project", t0);
        assert_eq!(bar.text(t0), "Open project");
        assert_eq!(bar.text(t0 + Duration::from_millis(1499)), "Open project");
        assert_eq!(bar.text(t0 + MESSAGE_TTL), "Ready");
    }

    #[test]
    fn newer_message_replaces_older() {
        let mut bar = StatusBar::new();
        let t0 = Instant::now();

        bar.post("New project", t0);
        bar.post("Save project", t0 + Duration::from_millis(500));
        assert_eq!(bar.text(t0 + Duration::from_millis(1600)), "Save project");
        assert_eq!(bar.text(t0 + Duration::from_millis(2000)), "Ready");
    }

    #[test]
    fn time_left_counts_down() {
        let mut bar = StatusBar::new();
        let t0 = Instant::now();

        assert_eq!(bar.time_left(t0), None);
        bar.post("New project", t0);
        assert_eq!(
            bar.time_left(t0 + Duration::from_millis(500)),
            Some(Duration::from_millis(1000))
        );
    }
}
