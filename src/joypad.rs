use bitflags::bitflags;

bitflags! {
    /// Buttons held on the pad, in shift-out order (bit 0 goes first)
    struct Held: u8 {
        const A      = 0b00000001;
        const B      = 0b00000010;
        const SELECT = 0b00000100;
        const START  = 0b00001000;
        const UP     = 0b00010000;
        const DOWN   = 0b00100000;
        const LEFT   = 0b01000000;
        const RIGHT  = 0b10000000;
    }
}

/// Controller port of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoyPort {
    Port1,
    Port2,
}

/// Buttons on the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    A,
    B,
    Select,
    Start,
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    fn flag(self) -> Held {
        match self {
            Button::A => Held::A,
            Button::B => Held::B,
            Button::Select => Held::SELECT,
            Button::Start => Held::START,
            Button::Up => Held::UP,
            Button::Down => Held::DOWN,
            Button::Left => Held::LEFT,
            Button::Right => Held::RIGHT,
        }
    }
}

/// Emulated controller with its 8-bit parallel-in serial-out register
#[derive(Clone, Copy)]
pub struct JoyPad {
    strobe: bool,
    held: Held,
    shifter: u8,
}

impl JoyPad {
    pub fn new() -> Self {
        Self {
            strobe: false,
            held: Held::empty(),
            shifter: 0,
        }
    }

    /// Writes the strobe line
    ///
    /// While bit 0 is set the register keeps reloading from the buttons; clearing it
    /// freezes the snapshot that the following reads shift out.
    pub fn strobe(&mut self, v: u8) {
        self.strobe = v & 0x1 != 0;
        if self.strobe {
            self.shifter = self.held.bits();
        }
    }

    /// Shifts out the next button bit
    ///
    /// Order: A, B, Select, Start, Up, Down, Left, Right. After eight reads the
    /// register returns 1s, like an official pad.
    pub fn read(&mut self) -> u8 {
        if self.strobe {
            return self.held.contains(Held::A) as u8;
        }
        let output = self.shifter & 0x1;
        self.shifter >>= 1;
        self.shifter |= 0x80;
        output
    }

    /// Presses or releases a button
    pub fn update(&mut self, button: Button, pressed: bool) {
        self.held.set(button.flag(), pressed);
        if self.strobe {
            self.shifter = self.held.bits();
        }
    }
}

impl Default for JoyPad {
    fn default() -> Self {
        Self::new()
    }
}
