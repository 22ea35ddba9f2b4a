//! Tile validity checks used at placement time

use crate::domain::value_objects::{Footprint, TilePos, TileStrictness};

/// World predicates that tile validity is built from
pub trait TileOccupancy {
    /// A placed object sits on the tile
    fn is_object_at(&self, location: &str, tile: TilePos) -> bool;

    /// Anything at all occupies the tile (objects, terrain features, buildings, ...)
    fn is_occupied(&self, location: &str, tile: TilePos) -> bool;

    /// The tile carries no placement restriction
    fn can_place_item(&self, location: &str, tile: TilePos) -> bool;

    /// The tile is flagged as a no-spawn zone
    fn is_no_spawn(&self, location: &str, tile: TilePos) -> bool;
}

/// Whether every tile of a footprint at `origin` is free at the given strictness
///
/// `origin` is the top-left tile. Fails fast on the first bad tile.
pub fn is_tile_valid<W: TileOccupancy + ?Sized>(
    world: &W,
    location: &str,
    origin: TilePos,
    footprint: Footprint,
    strictness: TileStrictness,
) -> bool {
    if strictness == TileStrictness::None {
        return true;
    }

    let width = i32::try_from(footprint.width.max(1)).unwrap_or(i32::MAX);
    let height = i32::try_from(footprint.height.max(1)).unwrap_or(i32::MAX);
    (0..width).all(|dx| {
        (0..height).all(|dy| is_single_tile_valid(world, location, origin.offset(dx, dy), strictness))
    })
}

fn is_single_tile_valid<W: TileOccupancy + ?Sized>(
    world: &W,
    location: &str,
    tile: TilePos,
    strictness: TileStrictness,
) -> bool {
    if strictness >= TileStrictness::Low && world.is_object_at(location, tile) {
        return false;
    }
    if strictness >= TileStrictness::Medium && world.is_occupied(location, tile) {
        return false;
    }
    if strictness >= TileStrictness::High && !world.can_place_item(location, tile) {
        return false;
    }
    if strictness >= TileStrictness::Max && world.is_no_spawn(location, tile) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;

    #[derive(Default)]
    struct FakeWorld {
        objects: HashSet<(i32, i32)>,
        occupied: HashSet<(i32, i32)>,
        restricted: HashSet<(i32, i32)>,
        no_spawn: HashSet<(i32, i32)>,
        queries: Cell<usize>,
    }

    impl TileOccupancy for FakeWorld {
        fn is_object_at(&self, _location: &str, tile: TilePos) -> bool {
            self.queries.set(self.queries.get() + 1);
            self.objects.contains(&(tile.x, tile.y))
        }

        fn is_occupied(&self, _location: &str, tile: TilePos) -> bool {
            self.queries.set(self.queries.get() + 1);
            self.occupied.contains(&(tile.x, tile.y))
        }

        fn can_place_item(&self, _location: &str, tile: TilePos) -> bool {
            self.queries.set(self.queries.get() + 1);
            !self.restricted.contains(&(tile.x, tile.y))
        }

        fn is_no_spawn(&self, _location: &str, tile: TilePos) -> bool {
            self.queries.set(self.queries.get() + 1);
            self.no_spawn.contains(&(tile.x, tile.y))
        }
    }

    fn check(world: &FakeWorld, x: i32, y: i32, strictness: TileStrictness) -> bool {
        is_tile_valid(world, "Farm", TilePos::new(x, y), Footprint::SINGLE, strictness)
    }

    #[test]
    fn test_none_never_queries_the_world() {
        let world = FakeWorld {
            objects: [(0, 0)].into_iter().collect(),
            ..FakeWorld::default()
        };
        assert!(check(&world, 0, 0, TileStrictness::None));
        assert_eq!(world.queries.get(), 0);
    }

    #[test]
    fn test_each_tier_adds_a_check() {
        let world = FakeWorld {
            objects: [(1, 0)].into_iter().collect(),
            occupied: [(2, 0)].into_iter().collect(),
            restricted: [(3, 0)].into_iter().collect(),
            no_spawn: [(4, 0)].into_iter().collect(),
            ..FakeWorld::default()
        };

        assert!(!check(&world, 1, 0, TileStrictness::Low));
        assert!(check(&world, 2, 0, TileStrictness::Low));
        assert!(!check(&world, 2, 0, TileStrictness::Medium));
        assert!(check(&world, 3, 0, TileStrictness::Medium));
        assert!(!check(&world, 3, 0, TileStrictness::High));
        assert!(check(&world, 4, 0, TileStrictness::High));
        assert!(!check(&world, 4, 0, TileStrictness::Max));
        assert!(check(&world, 5, 0, TileStrictness::Max));
    }

    #[test]
    fn test_footprint_checks_every_tile() {
        let world = FakeWorld {
            occupied: [(11, 11)].into_iter().collect(),
            ..FakeWorld::default()
        };
        let big = Footprint::new(2, 2);
        assert!(!is_tile_valid(&world, "Farm", TilePos::new(10, 10), big, TileStrictness::Medium));
        assert!(is_tile_valid(&world, "Farm", TilePos::new(12, 10), big, TileStrictness::Medium));
        assert!(is_tile_valid(&world, "Farm", TilePos::new(10, 10), big, TileStrictness::Low));
    }

    #[test]
    fn test_footprint_fails_fast() {
        let world = FakeWorld {
            objects: [(0, 0)].into_iter().collect(),
            ..FakeWorld::default()
        };
        assert!(!is_tile_valid(&world, "Farm", TilePos::new(0, 0), Footprint::new(3, 3), TileStrictness::Low));
        assert_eq!(world.queries.get(), 1);
    }

    #[test]
    fn test_oversized_footprint_still_checks_tiles() {
        let world = FakeWorld {
            objects: [(0, 0)].into_iter().collect(),
            ..FakeWorld::default()
        };
        let huge = Footprint::new(u32::MAX, u32::MAX);
        assert!(!is_tile_valid(&world, "Farm", TilePos::new(0, 0), huge, TileStrictness::Low));
        assert_eq!(world.queries.get(), 1);
    }
}
