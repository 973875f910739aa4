pub const ENTER_DELAY_MS: u32 = 100;
pub const EXIT_TRANSITION_MS: u32 = 300;

const OFFSCREEN_TRANSFORM: &str = "translateX(400px)";
const ONSCREEN_TRANSFORM: &str = "translateX(0)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-times-circle",
            Self::Info => "fa-info-circle",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Info => "#6366f1",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification-{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn new(id: u64, message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id,
            message: message.into(),
            kind,
            phase: ToastPhase::Entering,
        }
    }

    pub fn transform(&self) -> &'static str {
        match self.phase {
            ToastPhase::Visible => ONSCREEN_TRANSFORM,
            ToastPhase::Entering | ToastPhase::Leaving => OFFSCREEN_TRANSFORM,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3); \
z-index: 10000; transform: {}; transition: transform 0.3s ease; max-width: 300px;",
            self.kind.color(),
            self.transform()
        )
    }
}

/// Delays, measured from creation, at which a toast slides in, starts sliding
/// out, and is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastSchedule {
    pub reveal_at_ms: u32,
    pub dismiss_at_ms: u32,
    pub remove_at_ms: u32,
}

impl ToastSchedule {
    pub fn for_display(display_ms: u32) -> Self {
        Self {
            reveal_at_ms: ENTER_DELAY_MS,
            dismiss_at_ms: display_ms,
            remove_at_ms: display_ms.saturating_add(EXIT_TRANSITION_MS),
        }
    }
}

/// Live notifications in creation order. Concurrent toasts share the same
/// fixed position and may overlap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn reveal(&mut self, id: u64) {
        self.set_phase(id, ToastPhase::Visible);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.set_phase(id, ToastPhase::Leaving);
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    fn set_phase(&mut self, id: u64, phase: ToastPhase) {
        if let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) {
            toast.phase = phase;
        }
    }
}
