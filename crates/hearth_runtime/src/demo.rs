//! The canonical example commands.
//!
//! Five well-formed commands, one per command kind, followed by five
//! malformed ones that each exercise a different diagnostic heuristic.

/// The demo command set, in presentation order.
pub const DEMO_COMMANDS: [&str; 10] = [
    "on motion detected then turn on lights",
    "schedule turn on watering at 6:00 AM",
    "if temperature > 30 then turn on AC",
    "repeat check temperature every 10 minutes",
    "activate night mode from 10:00 PM to 6:00 AM",
    // Malformed commands
    "when motion detected turn on lights",
    "if temperature > 30 start AC",
    "on humidity triggered then open lights",
    "schedule cooling at 14:99 PM",
    "activate silent mode 10 PM 6 AM",
];
