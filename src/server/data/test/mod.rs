mod friendship;
mod player;
mod player_server;
