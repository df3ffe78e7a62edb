#[derive(Debug, Clone)]
pub enum Message {
    /// Slider moved to a new position
    ThresholdChanged(u32),
    /// Any key went down; ends the program
    KeyPressed,
}
