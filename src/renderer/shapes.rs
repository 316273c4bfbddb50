//! Shape generation for 2D primitives

use super::RectSnapshot;
use super::vertex::Vertex;
use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Rows per net period; the first row of each period is left blank
const NET_PERIOD: u32 = 6;

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(r: &RectSnapshot, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (r.x, r.y);
    let (x1, y1) = (r.x + r.width, r.y + r.height);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Dotted one-pixel net down the middle of the playfield
///
/// Every row is lit except multiples of `NET_PERIOD`, emitted as one dash
/// per period.
pub fn center_net(color: [f32; 4]) -> Vec<Vertex> {
    let x = (PLAYFIELD_WIDTH / 2.0).floor();
    let rows = PLAYFIELD_HEIGHT as u32;

    (0..rows)
        .step_by(NET_PERIOD as usize)
        .flat_map(|start| {
            let top = start + 1;
            let bottom = (start + NET_PERIOD).min(rows);
            let dash = RectSnapshot {
                x,
                y: top as f32,
                width: 1.0,
                height: bottom.saturating_sub(top) as f32,
            };
            rect(&dash, color)
        })
        .collect()
}
