//! Endpoint selection for BC1 colour blocks.
//!
//! The two endpoints are the pair of pixels furthest apart in RGB space, found by
//! comparing every pair of eligible pixels (a pixel paired with itself included).

use dxt_block_codec_common::color_565::Color565;
use dxt_block_codec_common::color_8888::Color8888;
use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
use likely_stable::unlikely;

/// The two endpoints chosen for a block, already in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    /// Stored first in the block.
    pub c0: Color565,
    /// Stored second in the block.
    pub c1: Color565,
}

/// Finds the pair of pixels with the greatest squared RGB distance.
///
/// Pixels with alpha below `transparent_below` are skipped when it is [`Some`]. Ties keep the
/// first pair found. Returns [`None`] if no pixel is eligible.
pub fn furthest_pair(
    block: &Decoded4x4Block,
    transparent_below: Option<u8>,
) -> Option<(Color8888, Color8888)> {
    let eligible = |pixel: &Color8888| match transparent_below {
        Some(threshold) => !pixel.is_transparent(threshold),
        None => true,
    };

    let mut best: Option<(u32, Color8888, Color8888)> = None;
    for (i, a) in block.pixels.iter().enumerate() {
        if unlikely(!eligible(a)) {
            continue;
        }

        for b in block.pixels[i..].iter() {
            if unlikely(!eligible(b)) {
                continue;
            }

            let distance = a.distance_squared_rgb(b);
            match best {
                Some((best_distance, _, _)) if distance <= best_distance => {}
                _ => best = Some((distance, *a, *b)),
            }
        }
    }

    best.map(|(_, a, b)| (a, b))
}

/// Picks the endpoints for a block and orders them for the requested palette.
///
/// With `alpha_mode` unset the endpoints are stored as `c0 >= c1` (four colour palette);
/// with it set they are stored as `c0 <= c1` (three colour palette with a transparent
/// slot). A block with no eligible pixels gets two black endpoints.
pub fn select_endpoints(
    block: &Decoded4x4Block,
    transparent_below: Option<u8>,
    alpha_mode: bool,
) -> Endpoints {
    let (c0, c1) = match furthest_pair(block, transparent_below) {
        Some((a, b)) => (Color565::from_color_8888(a), Color565::from_color_8888(b)),
        None => (Color565::default(), Color565::default()),
    };

    let swap = if alpha_mode {
        c0.greater_than(&c1)
    } else {
        c1.greater_than(&c0)
    };

    if swap {
        Endpoints { c0: c1, c1: c0 }
    } else {
        Endpoints { c0, c1 }
    }
}
