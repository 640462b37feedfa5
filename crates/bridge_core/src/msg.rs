#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The reporter was attached to a page at `url`.
    Attached { url: String },
    /// Pointer released anywhere in the document (`mouseup`).
    PointerReleased,
    /// The document's selection changed (`selectionchange`).
    SelectionChanged,
    /// The pending debounce timer fired.
    DebounceElapsed,
    /// Result of reading the selection; `None` when it is empty.
    SelectionRead(Option<crate::SelectionSnapshot>),
}
