/// Render state a screen exposes to its presentation layer.
///
/// The presentation layer reads this after driving a load; the contract
/// is the tagged value, not any particular notification mechanism.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScreenState<T> {
    /// Not yet loaded.
    #[default]
    Idle,
    /// A load is in progress.
    Loading,
    /// Data is ready to render.
    Ready(T),
    /// The load failed; holds the user-facing message.
    Failed(String),
}

impl<T> ScreenState<T> {
    /// The ready payload, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
