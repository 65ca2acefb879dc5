use serde::{Deserialize, Serialize};

use crate::shared::constants::{BOUNCEABLE_TAG, NON_BOUNCEABLE_TAG, TEST_ONLY_FLAG};

// Basic types for wallet output
pub type Address = String;
pub type HexKey = String;

/// User-friendly address flavour
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressFormat {
    pub bounceable: bool,
    pub test_only: bool,
}

impl AddressFormat {
    pub fn new(bounceable: bool, test_only: bool) -> Self {
        Self { bounceable, test_only }
    }

    /// First byte of the 36-byte user-friendly form
    pub fn tag(&self) -> u8 {
        let tag = if self.bounceable { BOUNCEABLE_TAG } else { NON_BOUNCEABLE_TAG };
        if self.test_only {
            tag | TEST_ONLY_FLAG
        } else {
            tag
        }
    }
}

impl Default for AddressFormat {
    fn default() -> Self {
        Self::new(true, false)
    }
}
