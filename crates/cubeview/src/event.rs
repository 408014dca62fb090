use cubepuzzle::Twist;

/// Observable change in the controller, drained by the host each frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CubeEvent {
    /// A twist began animating.
    TwistStarted(Twist),
    /// A twist finished animating and was applied to the cube state.
    TwistCommitted(Twist),
    /// The move counter changed.
    MoveCountChanged(u32),
    /// The last move of a scramble was committed.
    ScrambleFinished,
    /// The cube was solved after at least one counted move.
    Solved,
}
