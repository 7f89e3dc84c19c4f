/// Paint layer for face elements.
///
/// Higher layers paint on top. The hour hand sits above the minute hand,
/// which sits above the second hand, so the hour hub ring is the one
/// visible at the center. The ordering is visual layering only; no
/// correctness invariant depends on it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Layer {
    SecondHand,
    MinuteHand,
    HourHand,
}
