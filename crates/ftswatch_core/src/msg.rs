#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Poll timer fired; time to fetch a fresh status snapshot.
    Tick,
    /// A status fetch resolved with a decoded snapshot.
    StatusReceived(crate::ProcessStatus),
    /// User pressed any key.
    KeyPressed,
    /// Terminal width changed.
    Resized { width: u16 },
    /// Animation frame: ease the displayed bar toward the target fraction.
    FrameAdvance,
}
