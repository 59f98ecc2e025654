/// Presents the current score to the player.
pub trait ScoreDisplay {
    fn show_score(&mut self, score: u32);
}
