//! Pre-computed rays: for every square and direction, the squares met walking
//! outward until the edge of the board.
//!
//! Both move generation and flipping walk these rays instead of re-checking
//! bounds on every step.

use super::sq::{SQ, NO_SQ};
use super::{DIRECTIONS, DIR_CNT, SQ_CNT};

use std::ops::Deref;

/// Longest possible walk from a square before leaving the board.
const MAX_RAY_LEN: usize = 7;

lazy_static! {
    /// Statically initialized ray tables created when first used. Indexed by
    /// `[square][direction]`, with directions in the order of [`DIRECTIONS`].
    ///
    /// [`DIRECTIONS`]: ../constant.DIRECTIONS.html
    pub static ref RAYS: [[Ray; DIR_CNT]; SQ_CNT] = gen_rays();
}

/// The squares reached from some origin along one direction, nearest first.
/// The origin itself is not included.
#[derive(Copy, Clone, Debug)]
pub struct Ray {
    squares: [SQ; MAX_RAY_LEN],
    len: u8,
}

impl Ray {
    const EMPTY: Ray = Ray {
        squares: [NO_SQ; MAX_RAY_LEN],
        len: 0,
    };
}

impl Deref for Ray {
    type Target = [SQ];

    #[inline(always)]
    fn deref(&self) -> &[SQ] {
        &self.squares[..self.len as usize]
    }
}

/// Returns the ray leaving `sq` in the direction at index `dir` of `DIRECTIONS`.
#[inline(always)]
pub fn ray(sq: SQ, dir: usize) -> &'static Ray {
    &RAYS[sq.index()][dir]
}

fn gen_rays() -> [[Ray; DIR_CNT]; SQ_CNT] {
    let mut rays = [[Ray::EMPTY; DIR_CNT]; SQ_CNT];
    for origin in SQ::all() {
        for (dir, step) in DIRECTIONS.iter().enumerate() {
            let ray = &mut rays[origin.index()][dir];
            let mut cur = origin.offset(*step);
            while let Some(sq) = cur {
                ray.squares[ray.len as usize] = sq;
                ray.len += 1;
                cur = sq.offset(*step);
            }
        }
    }
    rays
}
