//! Encoded initialization command lists
//!
//! Panels are brought up by replaying fixed tables of commands. Each table is
//! encoded as:
//!
//! ```text
//! [count] ( [opcode] [arg_count | DELAY_FLAG] [args...] [delay_ms]? ) * count
//! ```
//!
//! The high bit of the argument count says a delay byte follows the
//! arguments. A delay byte of 255 stands for 500ms.
//!
//! [`CommandList`] decodes a table into [`Step`] records so the driver never
//! walks raw bytes itself.
//!
//! ## Example
//!
//! ```
//! use st7735::command_list::{CommandList, Step, DELAY_FLAG};
//!
//! let table = [2, 0x01, DELAY_FLAG, 150, 0x3A, 1, 0x05];
//! let steps: Vec<Step<'_>> = CommandList::new(&table).collect();
//!
//! assert_eq!(steps[0], Step { opcode: 0x01, args: &[], delay_ms: Some(150) });
//! assert_eq!(steps[1], Step { opcode: 0x3A, args: &[0x05], delay_ms: None });
//! ```

use crate::command::{
    CASET, COLMOD, DISPON, FRMCTR1, FRMCTR2, FRMCTR3, GMCTRN1, GMCTRP1, INVCTR, INVOFF, MADCTL,
    NORON, PWCTR1, PWCTR2, PWCTR3, PWCTR4, PWCTR5, RASET, SLPOUT, SWRESET, VMCTR1,
};

/// Argument-count bit flagging a trailing delay byte
pub const DELAY_FLAG: u8 = 0x80;

/// Encoded delay meaning "wait 500ms"
pub const LONG_DELAY_MARKER: u8 = 255;

/// Delay substituted for [`LONG_DELAY_MARKER`]
pub const LONG_DELAY_MS: u16 = 500;

/// One decoded entry of a command list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step<'a> {
    /// Command byte
    pub opcode: u8,
    /// Parameter bytes sent as data after the command
    pub args: &'a [u8],
    /// Time to wait after the parameters, if any
    pub delay_ms: Option<u16>,
}

/// Iterator decoding an encoded command table into [`Step`]s
///
/// Tables are trusted input. A truncated entry ends iteration rather than
/// reading past the table.
#[derive(Clone, Debug)]
pub struct CommandList<'a> {
    bytes: &'a [u8],
    remaining: u8,
}

impl<'a> CommandList<'a> {
    /// Start decoding an encoded table
    pub fn new(table: &'a [u8]) -> Self {
        match table.split_first() {
            Some((&count, rest)) => Self {
                bytes: rest,
                remaining: count,
            },
            None => Self {
                bytes: &[],
                remaining: 0,
            },
        }
    }

    /// Number of entries the table header announces but which have not been decoded
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    fn truncated(&mut self) -> Option<Step<'a>> {
        log::warn!(
            "command list truncated with {} entries outstanding",
            self.remaining
        );
        self.remaining = 0;
        None
    }
}

impl<'a> Iterator for CommandList<'a> {
    type Item = Step<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bytes = self.bytes;
        let [opcode, encoded_count, rest @ ..] = bytes else {
            return self.truncated();
        };
        let has_delay = encoded_count & DELAY_FLAG != 0;
        let arg_count = usize::from(encoded_count & !DELAY_FLAG);
        if rest.len() < arg_count + usize::from(has_delay) {
            return self.truncated();
        }
        let (args, rest) = rest.split_at(arg_count);

        let (delay_ms, rest) = if has_delay {
            let delay = match rest[0] {
                LONG_DELAY_MARKER => LONG_DELAY_MS,
                ms => u16::from(ms),
            };
            (Some(delay), &rest[1..])
        } else {
            (None, rest)
        };

        self.bytes = rest;
        self.remaining -= 1;
        Some(Step {
            opcode: *opcode,
            args,
            delay_ms,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(usize::from(self.remaining)))
    }
}

/// First part of the init sequence shared by all R-type panels
///
/// Software reset, sleep out, frame rate, power, and 16-bit color mode.
#[rustfmt::skip]
pub const INIT_R_PART1: &[u8] = &[
    15,
    SWRESET, DELAY_FLAG, 150,
    SLPOUT, DELAY_FLAG, 255,
    FRMCTR1, 3, 0x01, 0x2C, 0x2D,
    FRMCTR2, 3, 0x01, 0x2C, 0x2D,
    FRMCTR3, 6, 0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D,
    INVCTR, 1, 0x07,
    PWCTR1, 3, 0xA2, 0x02, 0x84,
    PWCTR2, 1, 0xC5,
    PWCTR3, 2, 0x0A, 0x00,
    PWCTR4, 2, 0x8A, 0x2A,
    PWCTR5, 2, 0x8A, 0xEE,
    VMCTR1, 1, 0x0E,
    INVOFF, 0,
    MADCTL, 1, 0xC8,
    COLMOD, 1, 0x05,
];

/// Address range for 1.8" green-tab panels (offset by 2 columns, 1 row)
#[rustfmt::skip]
pub const INIT_R_GREEN: &[u8] = &[
    2,
    CASET, 4, 0x00, 0x02, 0x00, 0x7F + 0x02,
    RASET, 4, 0x00, 0x01, 0x00, 0x9F + 0x01,
];

/// Address range for 1.8" red-tab and black-tab panels
#[rustfmt::skip]
pub const INIT_R_RED: &[u8] = &[
    2,
    CASET, 4, 0x00, 0x00, 0x00, 0x7F,
    RASET, 4, 0x00, 0x00, 0x00, 0x9F,
];

/// Address range for 1.44" 128x128 green-tab panels
#[rustfmt::skip]
pub const INIT_R_GREEN_144: &[u8] = &[
    2,
    CASET, 4, 0x00, 0x00, 0x00, 0x7F,
    RASET, 4, 0x00, 0x00, 0x00, 0x7F,
];

/// Address range for 0.96" 80x160 mini panels
#[rustfmt::skip]
pub const INIT_R_MINI_160X80: &[u8] = &[
    2,
    CASET, 4, 0x00, 0x00, 0x00, 0x4F,
    RASET, 4, 0x00, 0x00, 0x00, 0x9F,
];

/// Final part of the init sequence: gamma tables, normal mode, display on
#[rustfmt::skip]
pub const INIT_R_PART3: &[u8] = &[
    4,
    GMCTRP1, 16,
    0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D,
    0x29, 0x25, 0x2B, 0x39, 0x00, 0x01, 0x03, 0x10,
    GMCTRN1, 16,
    0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D,
    0x2E, 0x2E, 0x37, 0x3F, 0x00, 0x00, 0x02, 0x10,
    NORON, DELAY_FLAG, 10,
    DISPON, DELAY_FLAG, 100,
];
