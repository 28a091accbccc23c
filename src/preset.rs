pub mod boards {
    /// Standard setup: twelve pieces per side on the three rows nearest each player.
    pub const NORMAL: &str = "w1w1w1w1/1w1w1w1w/w1w1w1w1/8/8/1b1b1b1b/b1b1b1b1/1b1b1b1b";

    /// Sparse setup: eight pieces per side on the two rows nearest each player.
    pub const SPARSE: &str = "w1w1w1w1/1w1w1w1w/8/8/8/8/b1b1b1b1/1b1b1b1b";
}
