/// Playfield dimensions.
///
/// The simulation runs on a fixed virtual playfield in float coordinates;
/// the display layer scales positions to whatever terminal it gets.

pub const PLAY_WIDTH: f32 = 800.0;
pub const PLAY_HEIGHT: f32 = 600.0;

/// Gap kept between the player and the bottom of the playfield.
pub const BOTTOM_MARGIN: f32 = 40.0;

/// Aliens whose bottom edge reaches this line win the invasion.
/// PLAY_HEIGHT - (player height + BOTTOM_MARGIN).
pub const DANGER_LINE_Y: f32 = 510.0;
