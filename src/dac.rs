//! DAC calibration code to RX logic value
//!
//! A packed code holds two 12-bit I/Q pairs; odd gain-table indices use the
//! upper pair. Each 6-bit component is shifted left by one into a 14-bit
//! logic word (Q in the upper byte, I in the lower).

use std::fmt;

const COMPONENT_MASK: u32 = 0x3F;
const UPPER_PAIR_OFFSET: u32 = 12;

/// The decoded `RX_LOGIC[13:0]` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DacLogic(pub u32);

impl fmt::Display for DacLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RX_LOGIC[13:0]={:#x}", self.0)
    }
}

pub fn dac_to_logic(code: u32, index: u32) -> DacLogic {
    let offset = if index % 2 == 0 { 0 } else { UPPER_PAIR_OFFSET };
    let dac_iq = code >> offset;
    let dac_i = dac_iq & COMPONENT_MASK;
    let dac_q = (dac_iq >> 6) & COMPONENT_MASK;
    DacLogic(((dac_q << 1) << 7) | (dac_i << 1))
}
