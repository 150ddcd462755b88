//! Volume control
//!
//! Volume range is 0-100%. Any integer input is accepted and clamped.

/// Maximum volume level
pub const MAX_VOLUME: u8 = 100;

/// Volume controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,
}

impl Volume {
    /// Create new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume (clamped to 100)
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(MAX_VOLUME),
        }
    }

    /// Set volume level, clamping into 0-100
    ///
    /// Returns the level actually applied.
    pub fn set_level(&mut self, level: i32) -> u8 {
        self.level = level.clamp(0, i32::from(MAX_VOLUME)) as u8;
        self.level
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_volume() {
        let vol = Volume::new(80);
        assert_eq!(vol.level(), 80);

        let vol = Volume::new(200);
        assert_eq!(vol.level(), 100);
    }

    #[test]
    fn set_volume_level() {
        let mut vol = Volume::new(50);
        assert_eq!(vol.level(), 50);

        assert_eq!(vol.set_level(75), 75);
        assert_eq!(vol.level(), 75);

        // Clamp to 100
        assert_eq!(vol.set_level(150), 100);

        // Clamp to 0
        assert_eq!(vol.set_level(-20), 0);
        assert_eq!(vol.set_level(i32::MIN), 0);
        assert_eq!(vol.set_level(i32::MAX), 100);
    }
}
