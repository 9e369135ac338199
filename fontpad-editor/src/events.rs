//! UI events dispatched to the controller.

/// One user action on the editor surface.
///
/// The UI layer translates widget interactions into these values and hands
/// them to [`EditorController::handle`](crate::EditorController::handle);
/// tests construct them directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// A family was picked in the family selector.
    FamilySelected(String),
    /// A variant token was picked in the variant selector.
    VariantSelected(String),
    /// The italic checkbox was toggled.
    ItalicToggled(bool),
    /// The text content changed.
    ContentEdited(String),
    /// The reset button was pressed.
    ResetPressed,
}
