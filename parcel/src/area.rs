use geo::{Coord, CoordFloat};

/// Returns the signed area enclosed by `ring` using the shoelace
/// formula.
///
/// The ring is implicitly closed (the last coordinate connects back to
/// the first). Counter-clockwise rings are positive, clockwise rings
/// negative. Rings with fewer than three coordinates enclose nothing.
pub fn signed_area<T: CoordFloat>(ring: &[Coord<T>]) -> T {
    if ring.len() < 3 {
        return T::zero();
    }
    let prev = ring.iter().cycle().skip(ring.len() - 1);
    let (forward, backward) = ring
        .iter()
        .zip(prev)
        .fold((T::zero(), T::zero()), |(forward, backward), (cur, prev)| {
            (forward + prev.x * cur.y, backward + cur.x * prev.y)
        });
    (forward - backward) / (T::one() + T::one())
}

/// Returns the magnitude of [`signed_area`], independent of traversal
/// direction.
pub fn unsigned_area<T: CoordFloat>(ring: &[Coord<T>]) -> T {
    signed_area(ring).abs()
}
