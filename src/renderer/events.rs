use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// Renderer property whose change triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RendererChangeKind {
    Style,
    ItemLabelGenerator,
    AdditionalItemLabelGenerator,
    ToolTipGenerator,
    UrlGenerator,
}

/// Notification sent to listeners after a renderer setting changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererChangeEvent {
    pub kind: RendererChangeKind,
}

impl RendererChangeEvent {
    #[must_use]
    pub const fn new(kind: RendererChangeKind) -> Self {
        Self { kind }
    }
}

/// Observer of renderer configuration changes (e.g. a cached plot image).
pub trait RendererChangeListener {
    fn id(&self) -> &str;
    fn on_renderer_changed(&mut self, event: &RendererChangeEvent);
}

/// Synchronous listener registry.
///
/// Events are delivered in registration order before `notify` returns.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<Box<dyn RendererChangeListener>>,
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field(
                "listeners",
                &self.listeners.iter().map(|l| l.id()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ChangeNotifier {
    /// Registers a listener with a unique, non-empty id.
    pub fn add_listener(&mut self, listener: Box<dyn RendererChangeListener>) -> ChartResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(ChartError::InvalidData(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.has_listener(&listener_id) {
            return Err(ChartError::InvalidData(format!(
                "listener with id `{listener_id}` is already registered"
            )));
        }
        debug!(listener = %listener_id, "register renderer change listener");
        self.listeners.push(listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn remove_listener(&mut self, listener_id: &str) -> bool {
        if let Some(position) = self
            .listeners
            .iter()
            .position(|entry| entry.id() == listener_id)
        {
            self.listeners.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners.iter().any(|entry| entry.id() == listener_id)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn notify(&mut self, event: RendererChangeEvent) {
        for listener in &mut self.listeners {
            listener.on_renderer_changed(&event);
        }
    }
}
