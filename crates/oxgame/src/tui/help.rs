//! Text of the help panel.

/// How the game is played.
pub const RULES: &[&str] = &[
    "A board game for two players.",
    "Players take turns placing X and O.",
    "The first to line up three across, down or diagonally wins.",
    "X moves first.",
];

/// How the program is driven.
pub const CONTROLS: &[&str] = &[
    "Arrow keys move the cursor; Enter or Space places a mark. Keys 1-9 place directly.",
    "Tab switches to the move list. Pick an entry with the arrow keys.",
    "Enter goes back to that move, or to the empty board.",
    "Playing after going back discards the later moves.",
    "s flips the move list between ascending and descending order.",
    "h or ? shows or hides this panel. n starts a new game. q quits.",
];
