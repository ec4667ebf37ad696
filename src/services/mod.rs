pub mod leaderboard;
pub mod simulator;
