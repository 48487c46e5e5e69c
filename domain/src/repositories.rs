mod player_stats_repository;

pub use player_stats_repository::PlayerStatsRepository;
