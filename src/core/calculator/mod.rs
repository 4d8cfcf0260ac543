pub mod leaderboard;
pub mod locations;
pub mod ordering;
pub mod recent;
pub mod streaks;
pub mod summary;
pub mod time_since;
