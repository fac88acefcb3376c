use sdl2::event::Event;
use sdl2::keyboard::Keycode;

pub enum Poll {
    Keys(u16),
    Quit,
}

pub struct KeyboardDriver {
    events: sdl2::EventPump,
}

impl KeyboardDriver {
    pub fn new(context: &sdl2::Sdl) -> Result<Self, String> {
        Ok(KeyboardDriver {
            events: context.event_pump()?,
        })
    }

    /// Drains pending window events and returns the held hex keys as a
    /// bitmask, or `Quit` on window close / Escape.
    pub fn poll(&mut self) -> Poll {
        for event in self.events.poll_iter() {
            if let Event::Quit { .. } = event {
                return Poll::Quit;
            }
        }

        let keys: Vec<Keycode> = self
            .events
            .keyboard_state()
            .pressed_scancodes()
            .filter_map(Keycode::from_scancode)
            .collect();

        let mut bits = 0u16;
        for key in keys {
            if key == Keycode::Escape {
                return Poll::Quit;
            }
            if let Some(i) = hex_key(key) {
                bits |= 1 << i;
            }
        }
        Poll::Keys(bits)
    }
}

/// COSMAC VIP keypad on the left of a QWERTY keyboard.
fn hex_key(key: Keycode) -> Option<u8> {
    match key {
        Keycode::Num1 => Some(0x1),
        Keycode::Num2 => Some(0x2),
        Keycode::Num3 => Some(0x3),
        Keycode::Num4 => Some(0xC),
        Keycode::Q => Some(0x4),
        Keycode::W => Some(0x5),
        Keycode::E => Some(0x6),
        Keycode::R => Some(0xD),
        Keycode::A => Some(0x7),
        Keycode::S => Some(0x8),
        Keycode::D => Some(0x9),
        Keycode::F => Some(0xE),
        Keycode::Z => Some(0xA),
        Keycode::X => Some(0x0),
        Keycode::C => Some(0xB),
        Keycode::V => Some(0xF),
        _ => None,
    }
}
