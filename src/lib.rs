pub mod bus;
pub mod game;
pub mod joypad;
pub mod nes;
pub mod ppu;
pub mod timer;
