//! # Processor Status Flags
//!
//! The status register is an 8-bit set of independent flags. Every flag is
//! addressed by its mask, so a caller can read or write any combination with
//! a single call.

use bitflags::bitflags;

bitflags! {
    /// 6502 processor status register (P).
    ///
    /// | Bit | Mask | Name              |
    /// |-----|------|-------------------|
    /// | 7   | 0x80 | NEGATIVE          |
    /// | 6   | 0x40 | OVERFLOW          |
    /// | 5   | 0x20 | UNUSED            |
    /// | 4   | 0x10 | BREAK             |
    /// | 3   | 0x08 | DECIMAL           |
    /// | 2   | 0x04 | INTERRUPT_DISABLE |
    /// | 1   | 0x02 | ZERO              |
    /// | 0   | 0x01 | CARRY             |
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::Status;
    ///
    /// let mut status = Status::empty();
    /// status.set(Status::CARRY, true);
    /// assert_eq!(status.bits(), 0x01);
    ///
    /// status.insert(Status::NEGATIVE);
    /// assert!(status.contains(Status::CARRY | Status::NEGATIVE));
    /// ```
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Carry
        const CARRY = 0b0000_0001;
        /// Zero
        const ZERO = 0b0000_0010;
        /// IRQ disable
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Decimal mode
        const DECIMAL = 0b0000_1000;
        /// Break command
        const BREAK = 0b0001_0000;
        /// Not used by any instruction
        const UNUSED = 0b0010_0000;
        /// Overflow
        const OVERFLOW = 0b0100_0000;
        /// Negative
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Recomputes Zero and Negative from a result byte.
    pub fn update_zn(&mut self, result: u8) {
        self.set(Status::ZERO, result == 0);
        self.set(Status::NEGATIVE, result & 0x80 != 0);
    }
}
