pub mod engine;

neon_arcade::arcade_game!(Memory);
