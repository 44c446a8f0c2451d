/// An error type for the viz module.
#[derive(thiserror::Error, Debug)]
pub enum VizError {
    /// Error when writing to the output fails.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error when a panel is placed outside the figure grid.
    #[error("Slot ({0}, {1}) is outside the {2}x{3} figure")]
    SlotOutOfRange(usize, usize, usize, usize),
}
