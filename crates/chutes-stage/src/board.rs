//! HTML board rendering.
//!
//! The board is a square image laid out as a 10-column grid. Each token is
//! placed by its space number: the ones digit picks the column and the rest
//! picks the row, counted from the bottom-left corner. Nothing stops a token
//! from running off the top once it passes space 99.

use crate::config::StageConfig;
use crate::state::Positions;

/// Columns on the board.
pub const COLUMNS: i64 = 10;

/// Percentage offset of the first column and row.
pub const MARGIN_PCT: i64 = 5;

/// Percentage width of one grid cell.
pub const CELL_PCT: i64 = 9;

/// Left and bottom offsets, in percent, for a token on `space`.
pub fn token_offset(space: i64) -> (i64, i64) {
    let column = space.rem_euclid(COLUMNS);
    let row = space.div_euclid(COLUMNS);
    (MARGIN_PCT + column * CELL_PCT, MARGIN_PCT + row * CELL_PCT)
}

/// Render the board with one token per entry in `positions`.
pub fn render_board(positions: &Positions, config: &StageConfig) -> String {
    let scale = config.board_scale;
    let mut out = String::from("---\n");
    out.push_str(&format!(
        "<div style=\"width: {scale}%; padding-bottom: {scale}%; border: 4px solid red; \
         border-radius: 4px; position: relative; display: table;\">"
    ));
    out.push_str(&format!(
        "<div style=\"width:100%; height: 100%; position: absolute; top: 0; left: 0; \
         background-image: url('{}'); background-size: 100% 100%;\"></div>",
        config.board_image_url
    ));

    for space in positions.values() {
        let (left, bottom) = token_offset(*space);
        out.push_str(&format!(
            "<div style=\"width: 5%; height: 5%; position: absolute; left: {left}%; \
             bottom: {bottom}%; background-image: url('{}'); background-size: 400% 300%; \
             background-position: 100% 100%; \
             filter: saturate(200%) brightness(70%) hue-rotate(330deg); z-index: 10;\"></div>",
            config.token_image_url
        ));
    }

    out.push_str("</div>");
    out
}
