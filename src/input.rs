//! Per-frame input snapshot.
//!
//! The front end owns the actual key tracking; the game only ever sees one
//! of these per tick. `held` is the total number of keys currently down,
//! which consumers compare against their own previous count to detect
//! press edges (a fire registers only on the frame the count leaves zero).

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub start: bool,
    /// Number of keys held this frame.
    pub held: u32,
}

impl InputFrame {
    /// A frame with nothing pressed.
    pub fn idle() -> Self {
        InputFrame::default()
    }
}
