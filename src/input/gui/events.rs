/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A render event is waiting in the presenter adapter.
    ///
    /// Receiving this does not redraw by itself; the handler polls the
    /// presenter and requests a redraw only if a new frame was taken.
    Wake,
}
