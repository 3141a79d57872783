//! Recording interface shared by the unit tests

use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::command::{CASET, RAMWR, RASET};
use crate::error::{MAX_COLUMNS, MAX_ROWS};
use crate::interface::DisplayInterface;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
    Command(u8),
    Data(Vec<u8>),
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MockError;

#[derive(Debug, Default)]
pub(crate) struct MockInterface {
    pub(crate) events: Vec<Event>,
    /// Fail every transfer once this many have succeeded
    pub(crate) fail_after: Option<usize>,
}

impl MockInterface {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing_after(transfers: usize) -> Self {
        Self {
            events: Vec::new(),
            fail_after: Some(transfers),
        }
    }

    fn transfer(&mut self, event: Event) -> Result<(), MockError> {
        if let Some(limit) = self.fail_after {
            let sent = self
                .events
                .iter()
                .filter(|e| !matches!(e, Event::Reset))
                .count();
            if sent >= limit {
                return Err(MockError);
            }
        }
        self.events.push(event);
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.events.clear();
    }

    pub(crate) fn commands(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Command(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// All data bytes in order, regardless of command
    pub(crate) fn data_bytes(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Data(d) => Some(d.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    /// Data bytes that followed each RAMWR
    pub(crate) fn pixel_bursts(&self) -> Vec<Vec<u8>> {
        let mut bursts = Vec::new();
        let mut current: Option<Vec<u8>> = None;
        for event in &self.events {
            match event {
                Event::Command(c) => {
                    if let Some(done) = current.take() {
                        bursts.push(done);
                    }
                    if *c == RAMWR {
                        current = Some(Vec::new());
                    }
                }
                Event::Data(d) => {
                    if let Some(burst) = current.as_mut() {
                        burst.extend_from_slice(d);
                    }
                }
                Event::Reset => {}
            }
        }
        bursts.extend(current);
        bursts
    }

    /// Windows as `(CASET params, RASET params)` in controller coordinates
    pub(crate) fn windows(&self) -> Vec<([u8; 4], [u8; 4])> {
        let mut windows = Vec::new();
        let mut caset = [0u8; 4];
        let mut last = None;
        for event in &self.events {
            match event {
                Event::Command(c) => last = Some(*c),
                Event::Data(d) if last == Some(CASET) => {
                    caset.copy_from_slice(&d[..4]);
                }
                Event::Data(d) if last == Some(RASET) => {
                    let mut raset = [0u8; 4];
                    raset.copy_from_slice(&d[..4]);
                    windows.push((caset, raset));
                }
                _ => {}
            }
        }
        windows
    }

    /// Replay the recorded traffic into a simulated controller memory
    ///
    /// Returns `MAX_COLUMNS * MAX_ROWS` colors, row-major; pixels never
    /// written stay `None`.
    pub(crate) fn render(&self) -> Vec<Option<u16>> {
        let cols = usize::from(MAX_COLUMNS);
        let mut memory = alloc::vec![None; cols * usize::from(MAX_ROWS)];
        let (mut xs, mut xe, mut ys, mut ye) = (0usize, 0usize, 0usize, 0usize);
        let (mut cx, mut cy) = (0usize, 0usize);
        let mut last = None;
        let mut params: Vec<u8> = Vec::new();
        let mut half: Option<u8> = None;

        for event in &self.events {
            match event {
                Event::Command(c) => {
                    last = Some(*c);
                    params.clear();
                    half = None;
                    if *c == RAMWR {
                        cx = xs;
                        cy = ys;
                    }
                }
                Event::Data(d) => match last {
                    Some(CASET) | Some(RASET) => {
                        params.extend_from_slice(d);
                        if params.len() >= 4 {
                            let start = usize::from(u16::from_be_bytes([params[0], params[1]]));
                            let end = usize::from(u16::from_be_bytes([params[2], params[3]]));
                            if last == Some(CASET) {
                                (xs, xe) = (start, end);
                            } else {
                                (ys, ye) = (start, end);
                            }
                        }
                    }
                    Some(RAMWR) => {
                        for &byte in d {
                            let Some(hi) = half.take() else {
                                half = Some(byte);
                                continue;
                            };
                            if cy <= ye && cx < cols && cy < usize::from(MAX_ROWS) {
                                memory[cy * cols + cx] = Some(u16::from_be_bytes([hi, byte]));
                            }
                            cx += 1;
                            if cx > xe {
                                cx = xs;
                                cy += 1;
                            }
                        }
                    }
                    _ => {}
                },
                Event::Reset => {}
            }
        }
        memory
    }
}

impl DisplayInterface for MockInterface {
    type Error = MockError;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.transfer(Event::Command(command))
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.transfer(Event::Data(data.to_vec()))
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        self.events.push(Event::Reset);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub(crate) struct MockDelay {
    pub(crate) delays_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}
