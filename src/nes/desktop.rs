use log::{debug, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;

use super::Nes;
use crate::joypad::{Button, JoyPort};
use crate::ppu::frame::{HEIGHT, WIDTH};
use crate::timer::{Timer, FRAME_TIME};

static WINDOW_TITLE: &str = "nesroom";

/// Settings of the desktop runner
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Window size as a multiple of the 256x240 picture
    pub scale: u32,
    /// Pace frames at 60 Hz
    pub limit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: 3,
            limit: true,
        }
    }
}

/// Keyboard layout of controller 1
pub fn map_key(key: Keycode) -> Option<Button> {
    match key {
        Keycode::Up => Some(Button::Up),
        Keycode::Down => Some(Button::Down),
        Keycode::Left => Some(Button::Left),
        Keycode::Right => Some(Button::Right),
        Keycode::X => Some(Button::A),
        Keycode::Z => Some(Button::B),
        Keycode::RShift => Some(Button::Select),
        Keycode::Return => Some(Button::Start),
        _ => None,
    }
}

/// Opens a window and runs the game until it is closed
pub fn run(config: Config) -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let window = video_subsystem
        .window(
            WINDOW_TITLE,
            WIDTH as u32 * config.scale,
            HEIGHT as u32 * config.scale,
        )
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;
    let creator = canvas.texture_creator();
    let mut texture = creator
        .create_texture_target(PixelFormatEnum::RGB24, WIDTH as u32, HEIGHT as u32)
        .map_err(|e| e.to_string())?;

    info!("video driver: {}", video_subsystem.current_video_driver());
    info!("{:?}", config);

    let mut nes = Nes::new();
    let mut timer = Timer::new();
    'nes: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'nes,
                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    repeat: false,
                    ..
                } => {
                    info!("reset");
                    nes.reset();
                }
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(button) = map_key(key) {
                        nes.update_joypad(button, true, JoyPort::Port1);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(button) = map_key(key) {
                        nes.update_joypad(button, false, JoyPort::Port1);
                    }
                }
                _ => {}
            }
        }

        if let Some(report) = nes.frame() {
            if report.palette.is_some() || report.dialog {
                debug!("frame {}: {:?}", nes.frame_count(), report);
            }
        }

        let frame = nes.render();
        texture
            .update(None, frame.pixels(), WIDTH * 3)
            .map_err(|e| e.to_string())?;
        canvas.copy(&texture, None, None)?;
        canvas.present();

        if config.limit {
            timer.wait(FRAME_TIME);
        }
        timer.reset();
    }

    Ok(())
}
