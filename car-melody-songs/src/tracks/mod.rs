mod game_of_thrones;
mod pirates;
mod squid_game;

pub use game_of_thrones::GAME_OF_THRONES;
pub use pirates::PIRATES;
pub use squid_game::SQUID_GAME;
