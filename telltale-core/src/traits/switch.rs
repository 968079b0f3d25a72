//! Switch output trait

/// Trait for the boolean output pin mirrored from the designated channel.
///
/// Implementations drive the physical pin; the level is re-asserted on
/// every matching command, not edge-triggered.
pub trait SwitchOutput {
    /// Drive the output to the active or inactive level
    fn set_active(&mut self, active: bool);
}
