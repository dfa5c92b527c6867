use crate::domain::palette::BG_COLOR;

use super::SimulationEngine;

/// Clear the frame to the background and stamp every particle as a
/// `render_size` square anchored at its position. Squares that cross an
/// edge wrap to the other side, like the particles themselves.
pub(super) fn render_frame(engine: &mut SimulationEngine) -> &[u32] {
    let w = engine.torus.width() as usize;
    let h = engine.torus.height() as usize;

    if engine.frame_buffer.len() != w * h {
        engine.frame_buffer = vec![BG_COLOR; w * h];
    } else {
        engine.frame_buffer.fill(BG_COLOR);
    }

    let size = engine.config.render_size as usize;
    let buffer = &mut engine.frame_buffer;

    for (color, x, y) in engine.particles.view().iter() {
        let abgr = engine.palette[color as usize];
        // Positions are in [0, width); the modulo only matters for
        // fractional world sizes.
        let px = (x as usize) % w;
        let py = (y as usize) % h;

        for dy in 0..size {
            let row = ((py + dy) % h) * w;
            for dx in 0..size {
                buffer[row + (px + dx) % w] = abgr;
            }
        }
    }

    &engine.frame_buffer
}
