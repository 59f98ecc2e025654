//! Terminal front end: implements the collaborator traits on top of ratatui
//! and crossterm.

pub mod cell_canvas;
pub mod game_scene;
pub mod terminal_audio;
