//! Rejection sampling of collectible positions.
//!
//! Both functions keep drawing until a free cell turns up. They never return on
//! a grid with no free cell left.

use super::{sampler::Sampler, snake::Body, state::Position};

/// Pick a cell for food that the body does not cover.
///
/// `avoid` is the active hungry item's cell, if there is one.
pub fn place_food<B: Body>(
    sampler: &mut Sampler,
    body: &B,
    avoid: Option<Position>,
) -> Position {
    let (width, height) = body.grid_size();
    loop {
        let pos = sampler.cell(width, height);
        if !body.occupies(pos) && Some(pos) != avoid {
            return pos;
        }
    }
}

/// Pick a cell for a hungry item that is neither under the body nor on the food
pub fn place_hungry<B: Body>(sampler: &mut Sampler, body: &B, food: Position) -> Position {
    let (width, height) = body.grid_size();
    loop {
        let pos = sampler.cell(width, height);
        if !body.occupies(pos) && pos != food {
            return pos;
        }
    }
}
