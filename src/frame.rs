//! Implements decoding of the control frames found in the capture payloads.
//!
//! A payload is one HID control transfer dumped as hexadecimal text. The
//! device protocol frames every command the same way: a transport header,
//! the number of meaningful argument bytes, a two-byte command word and an
//! argument buffer that is larger than the command actually uses.

use std::fmt;

use crate::error::DecodeFrameError;

// Hex-digit offsets of the frame fields, two digits per byte.
const STATUS_AT: usize = 0;
const ID_AT: usize = 2;
const REMAINING_PACKETS_AT: usize = 4;
const PROTOCOL_TYPE_AT: usize = 8;
const ARGC_AT: usize = 10;
const COMMAND_AT: usize = 12;
const ARGS_AT: usize = 16;

/// A decoded control frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    status: u8,
    id: u8,
    remaining_packets: u16,
    protocol_type: u8,
    command: u16,
    args: Vec<u8>,
}

impl Frame {
    /// Command status byte. 0x00 in requests, set by the device in responses.
    pub fn status(&self) -> u8 {
        self.status
    }

    /// Transaction id chosen by the sender.
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn remaining_packets(&self) -> u16 {
        self.remaining_packets
    }

    pub fn protocol_type(&self) -> u8 {
        self.protocol_type
    }

    /// Command class byte and command id byte as one word.
    pub fn command(&self) -> u16 {
        self.command
    }

    pub fn args(&self) -> &[u8] {
        &self.args
    }

    /// Number of meaningful argument bytes, as declared by the frame itself.
    pub fn argc(&self) -> usize {
        self.args.len()
    }

    /// Decoding logic for one payload.
    /// Fails if the payload is shorter than its declared argument count.
    pub fn try_decode(payload: &str) -> Result<Self, DecodeFrameError> {
        log::trace!("Entering Frame::try_decode.");

        let status = hex_u8(payload, STATUS_AT)?;
        let id = hex_u8(payload, ID_AT)?;
        let remaining_packets = hex_u16(payload, REMAINING_PACKETS_AT)?;
        let protocol_type = hex_u8(payload, PROTOCOL_TYPE_AT)?;
        let argc = usize::from(hex_u8(payload, ARGC_AT)?);
        let command = hex_u16(payload, COMMAND_AT)?;

        // The argument buffer holds more bytes than are meaningful. Only the
        // declared argc of them belong to the command, the rest is padding
        // followed by crc and reserved bytes.
        let args = (0..argc)
            .map(|i| hex_u8(payload, ARGS_AT + 2 * i))
            .collect::<Result<Vec<u8>, DecodeFrameError>>()?;

        let frame = Frame {
            status,
            id,
            remaining_packets,
            protocol_type,
            command,
            args,
        };

        log::trace!("Leaving Frame::try_decode.");
        Ok(frame)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "status={:02x} id={:02x} remaining={:04x} proto={:02x} cmd={:04x} args={:02x?}",
            self.status, self.id, self.remaining_packets, self.protocol_type, self.command, self.args
        )
    }
}

/// Slice `len` hex digits out of the payload starting at digit `at`.
fn hex_field(payload: &str, at: usize, len: usize) -> Result<&str, DecodeFrameError> {
    payload
        .get(at..at + len)
        .ok_or(DecodeFrameError::PayloadTooShort {
            expected: at + len,
            actual: payload.len(),
        })
}

fn hex_u8(payload: &str, at: usize) -> Result<u8, DecodeFrameError> {
    let field = hex_field(payload, at, 2)?;
    u8::from_str_radix(field, 16).map_err(|_| DecodeFrameError::InvalidHex(field.to_string()))
}

fn hex_u16(payload: &str, at: usize) -> Result<u16, DecodeFrameError> {
    let field = hex_field(payload, at, 4)?;
    u16::from_str_radix(field, 16).map_err(|_| DecodeFrameError::InvalidHex(field.to_string()))
}
